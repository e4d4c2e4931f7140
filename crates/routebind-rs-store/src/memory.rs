//! In-memory entity store.
//!
//! [`MemoryStore`] is the reference [`EntityStore`] implementation: entities
//! live in a `Vec` in insertion order, so "first match wins" falls out of a
//! linear scan. It backs the integration tests and is good enough for small
//! fixed datasets (demo apps, seed data) in real hosts.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use routebind_rs_core::BindResult;

use crate::entity::Entity;
use crate::store::EntityStore;

/// An insertion-ordered, in-memory entity store.
///
/// # Examples
///
/// ```
/// use routebind_rs_store::memory::MemoryStore;
/// use routebind_rs_store::entity::Entity;
/// use routebind_rs_store::store::EntityStore;
///
/// # async fn example() {
/// let store = MemoryStore::new();
/// store.insert(Entity::new("User").with("id", 1_i64).with("username", "alice"));
///
/// let found = store.find_one("User", "username", "alice").await.unwrap();
/// assert!(found.is_some());
/// # }
/// ```
#[derive(Default)]
pub struct MemoryStore {
    entities: RwLock<Vec<Entity>>,
    route_keys: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity. Insertion order is the scan order for lookups.
    pub fn insert(&self, entity: Entity) {
        self.entities
            .write()
            .expect("entity list lock poisoned")
            .push(entity);
    }

    /// Declares the route-identifying field for an entity kind.
    ///
    /// Kinds without a declared route key fall back to `"id"`.
    pub fn set_route_key(&self, kind: impl Into<String>, field: impl Into<String>) {
        self.route_keys
            .write()
            .expect("route key lock poisoned")
            .insert(kind.into(), field.into());
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.read().expect("entity list lock poisoned").len()
    }

    /// Returns `true` if the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    fn route_key(&self, kind: &str) -> String {
        self.route_keys
            .read()
            .expect("route key lock poisoned")
            .get(kind)
            .cloned()
            .unwrap_or_else(|| "id".to_string())
    }

    async fn find_one(
        &self,
        kind: &str,
        field: &str,
        value: &str,
    ) -> BindResult<Option<Entity>> {
        let entities = self.entities.read().expect("entity list lock poisoned");
        Ok(entities
            .iter()
            .find(|e| e.kind() == kind && e.field_matches(field, value))
            .cloned())
    }
}
