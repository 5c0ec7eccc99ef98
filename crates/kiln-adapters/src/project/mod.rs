//! Project configuration adapters.

mod rc_file;

pub use rc_file::{RC_FILE_NAME, RcFile, RcProjectContext};
