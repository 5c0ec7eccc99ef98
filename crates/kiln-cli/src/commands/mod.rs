//! One module per subcommand. Each exposes an `execute` function called from
//! `main::run`.

pub mod completions;
pub mod config;
pub mod init;
pub mod kinds;
pub mod make;
