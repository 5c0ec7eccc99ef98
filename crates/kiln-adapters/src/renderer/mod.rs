//! Renderer adapters.

mod stub;

pub use stub::{StubRenderer, substitute};
