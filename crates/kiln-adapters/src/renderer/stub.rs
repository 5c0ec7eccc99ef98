//! `{{ key }}` substitution renderer.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use kiln_core::{
    application::{
        RenderError,
        ports::{Filesystem, StubStore, TemplateRenderer},
    },
    domain::{StubRef, TemplateData},
    error::KilnResult,
};

/// Renders stubs from a [`StubStore`] and writes them through a [`Filesystem`].
pub struct StubRenderer {
    store: Box<dyn StubStore>,
    filesystem: Box<dyn Filesystem>,
}

impl StubRenderer {
    pub fn new(store: Box<dyn StubStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }
}

impl TemplateRenderer for StubRenderer {
    #[instrument(skip_all, fields(stub = %stub, filename = %filename))]
    fn render(
        &self,
        stub: &StubRef,
        destination_dir: &Path,
        filename: &str,
        data: &TemplateData,
        overwrite: bool,
    ) -> KilnResult<PathBuf> {
        let source = self
            .store
            .get(stub)?
            .ok_or_else(|| RenderError::TemplateNotFound {
                stub: stub.to_string(),
            })?;

        let path = destination_dir.join(filename);
        if !overwrite && self.filesystem.exists(&path) {
            return Err(RenderError::DestinationExists { path }.into());
        }

        let content = substitute(&source, data);

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &content)?;

        debug!(path = %path.display(), bytes = content.len(), "Stub rendered");
        Ok(path)
    }
}

/// Replace every `{{ key }}` whose key is in `data`.
///
/// Whitespace inside the braces is ignored. Unknown keys and unterminated
/// braces are left exactly as written.
pub fn substitute(source: &str, data: &TemplateData) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = after_open[..close].trim();
        match data.get_str(key) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filesystem::MemoryFilesystem, template_store::InMemoryStubStore};
    use kiln_core::error::KilnError;

    fn renderer(fs: &MemoryFilesystem) -> StubRenderer {
        let store = InMemoryStubStore::new();
        store
            .insert(StubRef::new("model"), "export default class {{ filename }} {}")
            .unwrap();
        StubRenderer::new(Box::new(store), Box::new(fs.clone()))
    }

    fn data() -> TemplateData {
        TemplateData::new().with("filename", "User")
    }

    #[test]
    fn substitutes_known_keys_and_keeps_unknown() {
        let data = TemplateData::new().with("name", "user").with("count", 2);
        assert_eq!(
            substitute("{{name}} {{ name }} {{ count }} {{ other }} {{ open", &data),
            "user user 2 {{ other }} {{ open"
        );
    }

    #[test]
    fn writes_rendered_file_and_creates_parents() {
        let fs = MemoryFilesystem::new();
        let path = renderer(&fs)
            .render(
                &StubRef::new("model"),
                Path::new("/app/Models"),
                "admin/User.ts",
                &data(),
                false,
            )
            .unwrap();

        assert_eq!(path, PathBuf::from("/app/Models/admin/User.ts"));
        assert_eq!(
            fs.read_file(&path).as_deref(),
            Some("export default class User {}")
        );
    }

    #[test]
    fn existing_file_needs_overwrite() {
        let fs = MemoryFilesystem::new();
        let renderer = renderer(&fs);
        let dir = Path::new("/app/Models");
        let stub = StubRef::new("model");

        renderer.render(&stub, dir, "User.ts", &data(), false).unwrap();

        let err = renderer
            .render(&stub, dir, "User.ts", &data(), false)
            .unwrap_err();
        assert_eq!(
            err,
            KilnError::from(RenderError::DestinationExists {
                path: dir.join("User.ts")
            })
        );

        renderer.render(&stub, dir, "User.ts", &data(), true).unwrap();
    }

    #[test]
    fn unknown_stub_is_template_not_found() {
        let fs = MemoryFilesystem::new();
        let err = renderer(&fs)
            .render(
                &StubRef::new("policy"),
                Path::new("/app"),
                "x.ts",
                &data(),
                false,
            )
            .unwrap_err();
        assert_eq!(
            err,
            KilnError::from(RenderError::TemplateNotFound {
                stub: "policy".into()
            })
        );
        assert!(fs.list_files().is_empty());
    }
}
