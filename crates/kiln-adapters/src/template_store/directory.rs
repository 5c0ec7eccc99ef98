//! Project stubs read from `<dir>/<id>.stub`.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use kiln_core::{
    application::ports::StubStore,
    domain::StubRef,
    error::{KilnError, KilnResult},
};

const STUB_EXTENSION: &str = "stub";

/// Stubs stored as files in one directory.
///
/// Ids may contain `/` to address subdirectories (`api/controller` →
/// `<dir>/api/controller.stub`). A missing directory is an empty store.
#[derive(Debug, Clone)]
pub struct DirectoryStubStore {
    root: PathBuf,
}

impl DirectoryStubStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &StubRef) -> PathBuf {
        self.root.join(format!("{}.{STUB_EXTENSION}", id.as_str()))
    }
}

impl StubStore for DirectoryStubStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn get(&self, id: &StubRef) -> KilnResult<Option<String>> {
        let path = self.path_for(id);
        match fs::read_to_string(&path) {
            Ok(source) => {
                debug!(path = %path.display(), "Loaded project stub");
                Ok(Some(source))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KilnError::configuration(format!(
                "cannot read stub {}: {e}",
                path.display()
            ))),
        }
    }

    fn ids(&self) -> KilnResult<Vec<StubRef>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<StubRef> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry.path().extension().and_then(|e| e.to_str()) == Some(STUB_EXTENSION)
            })
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(&self.root).ok()?;
                let id = relative.with_extension("");
                let id = id
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                Some(StubRef::new(id))
            })
            .collect();

        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_stub_files_by_id() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("api")).unwrap();
        fs::write(tmp.path().join("model.stub"), "class {{ filename }}").unwrap();
        fs::write(tmp.path().join("api/controller.stub"), "api").unwrap();
        fs::write(tmp.path().join("README.md"), "ignored").unwrap();

        let store = DirectoryStubStore::new(tmp.path());

        assert_eq!(
            store.get(&StubRef::new("model")).unwrap().as_deref(),
            Some("class {{ filename }}")
        );
        assert_eq!(
            store.get(&StubRef::new("api/controller")).unwrap().as_deref(),
            Some("api")
        );
        assert_eq!(
            store.ids().unwrap(),
            vec![StubRef::new("api/controller"), StubRef::new("model")]
        );
    }

    #[test]
    fn missing_directory_is_empty() {
        let store = DirectoryStubStore::new("/definitely/not/here");
        assert!(store.ids().unwrap().is_empty());
        assert!(store.get(&StubRef::new("model")).unwrap().is_none());
    }
}
