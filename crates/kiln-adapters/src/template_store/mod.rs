//! Stub store adapters.

mod directory;
mod layered;
mod memory;

pub use directory::DirectoryStubStore;
pub use layered::LayeredStubStore;
pub use memory::InMemoryStubStore;
