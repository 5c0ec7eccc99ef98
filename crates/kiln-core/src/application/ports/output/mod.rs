//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::domain::{StubRef, TemplateData};
use crate::error::KilnResult;

/// Port for the host project's configuration.
///
/// Implemented by:
/// - `kiln_adapters::project::RcProjectContext` (`.kilnrc.json`)
///
/// Both methods are read-only queries.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectContext: Send + Sync {
    /// Whether `path` holds a recognized project configuration.
    fn has_project_root(&self, path: &Path) -> bool;

    /// Directory configured for `namespace`, if any.
    fn resolve_namespace_directory(&self, namespace: &str) -> Option<PathBuf>;
}

/// Port for stub rendering.
///
/// Implemented by:
/// - `kiln_adapters::renderer::StubRenderer` (`{{ key }}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `stub` with `data` into `destination_dir/filename`.
    ///
    /// An existing file is only replaced when `overwrite` is set. Returns the
    /// path that was written.
    fn render(
        &self,
        stub: &StubRef,
        destination_dir: &Path,
        filename: &str,
        data: &TemplateData,
        overwrite: bool,
    ) -> KilnResult<PathBuf>;
}

/// Port for stub storage and retrieval.
///
/// Implemented by:
/// - `kiln_adapters::template_store::InMemoryStubStore` (built-in stubs)
/// - `kiln_adapters::template_store::DirectoryStubStore` (project stubs)
/// - `kiln_adapters::template_store::LayeredStubStore` (project over built-in)
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Source text of the stub, `None` when unknown.
    fn get(&self, id: &StubRef) -> KilnResult<Option<String>>;

    /// Every stub id this store can serve, sorted.
    fn ids(&self) -> KilnResult<Vec<StubRef>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
