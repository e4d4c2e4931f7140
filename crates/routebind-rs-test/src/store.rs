//! Lookup-counting store wrapper.
//!
//! [`CountingStore`] wraps any [`EntityStore`] and counts `find_one`
//! invocations, so tests can assert the at-most-one-lookup guarantee of the
//! match predicate.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use routebind_rs_core::BindResult;
use routebind_rs_store::{Entity, EntityStore};

/// An [`EntityStore`] decorator that counts lookups.
///
/// # Examples
///
/// ```
/// use routebind_rs_store::{Entity, EntityStore, MemoryStore};
/// use routebind_rs_test::store::CountingStore;
///
/// let inner = MemoryStore::new();
/// inner.insert(Entity::new("User").with("username", "alice"));
/// let store = CountingStore::new(inner);
///
/// tokio_test::block_on(async {
///     store.find_one("User", "username", "alice").await.unwrap();
/// });
/// assert_eq!(store.lookup_count(), 1);
/// ```
pub struct CountingStore<S> {
    inner: S,
    lookups: AtomicUsize,
}

impl<S: EntityStore> CountingStore<S> {
    /// Wraps a store with a zeroed lookup counter.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Returns the wrapped store.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the number of `find_one` calls since the last reset.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Resets the lookup counter to zero.
    pub fn reset_lookup_count(&self) {
        self.lookups.store(0, Ordering::Relaxed);
    }
}

#[async_trait]
impl<S: EntityStore> EntityStore for CountingStore<S> {
    fn route_key(&self, kind: &str) -> String {
        self.inner.route_key(kind)
    }

    async fn find_one(
        &self,
        kind: &str,
        field: &str,
        value: &str,
    ) -> BindResult<Option<Entity>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.find_one(kind, field, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routebind_rs_store::MemoryStore;

    #[tokio::test]
    async fn test_counts_and_resets() {
        let store = CountingStore::new(MemoryStore::new());
        assert_eq!(store.lookup_count(), 0);

        store.find_one("User", "id", "1").await.unwrap();
        store.find_one("User", "id", "2").await.unwrap();
        assert_eq!(store.lookup_count(), 2);

        store.reset_lookup_count();
        assert_eq!(store.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_delegates_route_key() {
        let inner = MemoryStore::new();
        inner.set_route_key("Page", "slug");
        let store = CountingStore::new(inner);
        assert_eq!(store.route_key("Page"), "slug");
        // route_key consultation is not a lookup.
        assert_eq!(store.lookup_count(), 0);
    }
}
