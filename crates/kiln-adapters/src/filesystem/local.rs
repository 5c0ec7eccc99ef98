//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use kiln_core::{
    application::{RenderError, ports::Filesystem},
    error::{KilnError, KilnResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KilnError {
    RenderError::WriteFailed {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_into_created_directories() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("app/Models");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("User.ts"), "export class User {}").unwrap();

        assert!(fs.exists(&dir.join("User.ts")));
        assert_eq!(
            std::fs::read_to_string(dir.join("User.ts")).unwrap(),
            "export class User {}"
        );
    }

    #[test]
    fn missing_parent_is_write_failed() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&tmp.path().join("nope/User.ts"), "")
            .unwrap_err();
        assert_eq!(err.code(), "render");
    }
}
