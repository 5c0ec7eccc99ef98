//! Application ports (traits) for external dependencies.
//!
//! Adapters in `kiln-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the pipeline or the renderer
//!   - `ProjectContext`: project root detection and namespace lookup
//!   - `TemplateRenderer`: stub rendering and writing
//!   - `StubStore`: stub lookup by id
//!   - `Filesystem`: file operations used by renderers

pub mod output;

pub use output::{Filesystem, ProjectContext, StubStore, TemplateRenderer};

#[cfg(test)]
pub use output::{MockProjectContext, MockTemplateRenderer};
