//! In-memory stub store with the built-in stubs.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use kiln_core::{
    application::{ApplicationError, ports::StubStore},
    domain::StubRef,
    error::KilnResult,
};

use crate::builtin_stubs;

/// Thread-safe in-memory stub store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStubStore {
    inner: Arc<RwLock<BTreeMap<StubRef, String>>>,
}

impl InMemoryStubStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one built-in stub per kind.
    pub fn with_builtin() -> Self {
        let stubs = builtin_stubs::all_stubs()
            .map(|(id, source)| (StubRef::new(id), source.to_string()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(stubs)),
        }
    }

    /// Insert or replace a stub.
    pub fn insert(&self, id: StubRef, source: impl Into<String>) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(id, source.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StubStore for InMemoryStubStore {
    fn get(&self, id: &StubRef) -> KilnResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(id).cloned())
    }

    fn ids(&self) -> KilnResult<Vec<StubRef>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::ArtifactKind;

    #[test]
    fn builtin_store_serves_every_kind() {
        let store = InMemoryStubStore::with_builtin();
        assert_eq!(store.len(), ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            assert!(store.get(&StubRef::new(kind.stub())).unwrap().is_some());
        }
    }

    #[test]
    fn insert_replaces_existing() {
        let store = InMemoryStubStore::with_builtin();
        store.insert(StubRef::new("model"), "custom").unwrap();
        assert_eq!(
            store.get(&StubRef::new("model")).unwrap().as_deref(),
            Some("custom")
        );
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(InMemoryStubStore::new()
            .get(&StubRef::new("factory"))
            .unwrap()
            .is_none());
    }
}
