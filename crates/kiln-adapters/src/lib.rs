//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln_core::application::ports`.
//! All I/O lives here: reading `.kilnrc.json`, loading stubs, writing files.

pub mod builtin_stubs;
pub mod filesystem;
pub mod project;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project::{RC_FILE_NAME, RcFile, RcProjectContext};
pub use renderer::StubRenderer;
pub use template_store::{DirectoryStubStore, InMemoryStubStore, LayeredStubStore};

use kiln_core::application::ports::StubStore;

/// Stub store for a project: its stub directory (when configured) over the
/// built-in stubs.
pub fn project_stub_store(context: &RcProjectContext) -> LayeredStubStore {
    let mut layers: Vec<Box<dyn StubStore>> = Vec::new();
    if let Some(dir) = context.stubs_dir() {
        layers.push(Box::new(DirectoryStubStore::new(dir)));
    }
    layers.push(Box::new(InMemoryStubStore::with_builtin()));
    LayeredStubStore::new(layers)
}
