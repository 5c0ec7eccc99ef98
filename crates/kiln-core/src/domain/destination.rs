//! Kind → directory resolution.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::domain::kind::ArtifactKind;

/// A namespace-to-directory table supplied by the project configuration.
///
/// Implemented for plain maps so callers and tests can pass one directly;
/// the pipeline adapts its `ProjectContext` port to this trait.
pub trait NamespaceMap {
    fn directory(&self, namespace: &str) -> Option<PathBuf>;
}

impl NamespaceMap for BTreeMap<String, PathBuf> {
    fn directory(&self, namespace: &str) -> Option<PathBuf> {
        self.get(namespace).cloned()
    }
}

impl NamespaceMap for HashMap<String, PathBuf> {
    fn directory(&self, namespace: &str) -> Option<PathBuf> {
        self.get(namespace).cloned()
    }
}

impl<M: NamespaceMap + ?Sized> NamespaceMap for &M {
    fn directory(&self, namespace: &str) -> Option<PathBuf> {
        (**self).directory(namespace)
    }
}

/// Maps an [`ArtifactKind`] to its configured directory.
pub struct DestinationResolver;

impl DestinationResolver {
    /// Single lookup of `kind.namespace()` in `map`.
    ///
    /// `None` means the project has no directory for this kind. Nothing is
    /// created or normalized here.
    pub fn resolve(kind: ArtifactKind, map: &impl NamespaceMap) -> Option<PathBuf> {
        map.directory(kind.namespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kind::all_kinds;
    use proptest::prelude::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, PathBuf> {
        entries
            .iter()
            .map(|(ns, dir)| (ns.to_string(), PathBuf::from(dir)))
            .collect()
    }

    #[test]
    fn resolves_configured_namespace() {
        let m = map(&[("models", "/app/Models"), ("controllers", "/app/Controllers")]);
        assert_eq!(
            DestinationResolver::resolve(ArtifactKind::Model, &m),
            Some(PathBuf::from("/app/Models"))
        );
    }

    #[test]
    fn missing_namespace_is_none() {
        let m = map(&[("models", "/app/Models")]);
        assert_eq!(DestinationResolver::resolve(ArtifactKind::Migration, &m), None);
    }

    #[test]
    fn hash_map_works_too() {
        let m: HashMap<String, PathBuf> =
            [("routes".to_string(), PathBuf::from("/start/routes"))].into();
        assert!(DestinationResolver::resolve(ArtifactKind::Route, &m).is_some());
    }

    proptest! {
        #[test]
        fn none_iff_namespace_absent(mask in prop::collection::vec(any::<bool>(), 14)) {
            let m: BTreeMap<String, PathBuf> = all_kinds()
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(kind, _)| (kind.namespace().to_string(), PathBuf::from("/dir")))
                .collect();

            for kind in all_kinds() {
                let resolved = DestinationResolver::resolve(*kind, &m);
                prop_assert_eq!(resolved.is_none(), !m.contains_key(kind.namespace()));
            }
        }
    }
}
