//! Project stubs layered over the built-ins.

use std::collections::BTreeSet;

use kiln_core::{application::ports::StubStore, domain::StubRef, error::KilnResult};

/// Looks up each stub in `layers` in order; the first hit wins.
pub struct LayeredStubStore {
    layers: Vec<Box<dyn StubStore>>,
}

impl LayeredStubStore {
    pub fn new(layers: Vec<Box<dyn StubStore>>) -> Self {
        Self { layers }
    }
}

impl StubStore for LayeredStubStore {
    fn get(&self, id: &StubRef) -> KilnResult<Option<String>> {
        for layer in &self.layers {
            if let Some(source) = layer.get(id)? {
                return Ok(Some(source));
            }
        }
        Ok(None)
    }

    fn ids(&self) -> KilnResult<Vec<StubRef>> {
        let mut ids = BTreeSet::new();
        for layer in &self.layers {
            ids.extend(layer.ids()?);
        }
        Ok(ids.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template_store::InMemoryStubStore;

    #[test]
    fn first_layer_shadows_later_ones() {
        let project = InMemoryStubStore::new();
        project.insert(StubRef::new("model"), "project model").unwrap();
        project.insert(StubRef::new("policy"), "policy").unwrap();

        let store = LayeredStubStore::new(vec![
            Box::new(project),
            Box::new(InMemoryStubStore::with_builtin()),
        ]);

        assert_eq!(
            store.get(&StubRef::new("model")).unwrap().as_deref(),
            Some("project model")
        );
        assert!(store.get(&StubRef::new("seeder")).unwrap().is_some());

        let ids = store.ids().unwrap();
        assert!(ids.contains(&StubRef::new("policy")));
        assert_eq!(ids.iter().filter(|id| id.as_str() == "model").count(), 1);
    }
}
