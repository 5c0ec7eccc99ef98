//! `.kilnrc.json`: the project marker and its namespace table.
//!
//! ```json
//! {
//!   "namespaces": {
//!     "models": "app/Models",
//!     "controllers": "app/Controllers/Http"
//!   },
//!   "stubs": "stubs"
//! }
//! ```
//!
//! Relative directories are joined onto the project root; absolute ones are
//! used as written.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use kiln_core::{
    application::ports::ProjectContext,
    domain::ArtifactKind,
    error::{KilnError, KilnResult},
};

/// File whose presence marks a project root.
pub const RC_FILE_NAME: &str = ".kilnrc.json";

/// Contents of `.kilnrc.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RcFile {
    #[serde(default)]
    pub namespaces: BTreeMap<String, PathBuf>,

    /// Directory holding project stubs, relative to the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stubs: Option<PathBuf>,
}

impl RcFile {
    /// Layout written by `kiln init`: one directory per kind.
    pub fn default_layout() -> Self {
        let namespaces = ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let dir = match kind {
                    ArtifactKind::File => "app",
                    ArtifactKind::View => "resources/views",
                    ArtifactKind::Model => "app/Models",
                    ArtifactKind::Migration => "database/migrations",
                    ArtifactKind::Controller => "app/Controllers/Http",
                    ArtifactKind::Action => "app/Actions",
                    ArtifactKind::CreateOptions => "app/Types/CreateOptions",
                    ArtifactKind::UpdateOptions => "app/Types/UpdateOptions",
                    ArtifactKind::ModelInterface => "app/Interfaces",
                    ArtifactKind::IdentifierOptions => "app/Types/IdentifierOptions",
                    ArtifactKind::Route => "start/routes",
                    ArtifactKind::Validator => "app/Validators",
                    ArtifactKind::Index => "app",
                    ArtifactKind::Seeder => "database/seeders",
                };
                (kind.namespace().to_string(), PathBuf::from(dir))
            })
            .collect();

        Self {
            namespaces,
            stubs: Some(PathBuf::from("stubs")),
        }
    }

    /// Parse rc file contents; `origin` is only used in the error message.
    pub fn parse(source: &str, origin: &Path) -> KilnResult<Self> {
        serde_json::from_str(source).map_err(|e| {
            KilnError::configuration(format!("invalid {}: {e}", origin.display()))
        })
    }

    pub fn to_json(&self) -> KilnResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| KilnError::Internal {
            message: format!("cannot serialize rc file: {e}"),
        })
    }
}

/// [`ProjectContext`] backed by a `.kilnrc.json` at `root`.
#[derive(Debug, Clone)]
pub struct RcProjectContext {
    root: PathBuf,
    rc: Option<RcFile>,
}

impl RcProjectContext {
    /// Read `<root>/.kilnrc.json`.
    ///
    /// A missing file is not an error here: the context simply reports no
    /// project root, and the pipeline turns that into `NotAProject`. A file
    /// that exists but cannot be read or parsed is a configuration error.
    #[instrument(fields(root = %root.as_ref().display()), skip(root))]
    pub fn load(root: impl AsRef<Path>) -> KilnResult<Self> {
        let root = root.as_ref().to_path_buf();
        let path = root.join(RC_FILE_NAME);

        let rc = match fs::read_to_string(&path) {
            Ok(source) => Some(RcFile::parse(&source, &path)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(KilnError::configuration(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        debug!(found = rc.is_some(), "Project configuration loaded");
        Ok(Self { root, rc })
    }

    /// Context over an already parsed rc file.
    pub fn from_rc(root: impl Into<PathBuf>, rc: RcFile) -> Self {
        Self {
            root: root.into(),
            rc: Some(rc),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rc(&self) -> Option<&RcFile> {
        self.rc.as_ref()
    }

    /// Absolute project stub directory, if configured.
    pub fn stubs_dir(&self) -> Option<PathBuf> {
        let stubs = self.rc.as_ref()?.stubs.as_ref()?;
        Some(self.root.join(stubs))
    }
}

impl ProjectContext for RcProjectContext {
    /// Only the root this context was loaded from counts: namespaces are
    /// resolved against it, not against `path`.
    fn has_project_root(&self, path: &Path) -> bool {
        self.rc.is_some() && path == self.root
    }

    fn resolve_namespace_directory(&self, namespace: &str) -> Option<PathBuf> {
        let dir = self.rc.as_ref()?.namespaces.get(namespace)?;
        Some(self.root.join(dir))
    }
}
