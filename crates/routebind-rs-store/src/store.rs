//! The entity store trait consumed by the binding layer.
//!
//! [`EntityStore`] is the minimal async interface the binding resolver needs
//! from a persistence layer: look up zero-or-one record of a kind by a single
//! field. Concrete stores (a database, a cache, the in-memory store in
//! [`memory`](crate::memory)) implement this trait; the binding layer never
//! sees anything else of the persistence stack.

use async_trait::async_trait;

use routebind_rs_core::{BindError, BindResult};

use crate::entity::Entity;

/// Minimal async entity lookup interface.
///
/// Lookups have zero-or-one semantics: `Ok(None)` means no record matched and
/// is an ordinary, expected outcome. If the queried field is not unique, the
/// first match wins. Store-level failures (connectivity, rejected queries)
/// are reported as [`BindError::StoreUnavailable`].
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Returns the designated route-identifying field for an entity kind.
    ///
    /// This is the field used to locate a record from a raw path-segment
    /// value when a binder does not name one explicitly (e.g. `"slug"` for
    /// pages, `"username"` for users). Defaults to the primary key field
    /// `"id"`.
    fn route_key(&self, kind: &str) -> String {
        let _ = kind;
        "id".to_string()
    }

    /// Looks up the first entity of `kind` whose `field` equals `value`.
    ///
    /// Returns `Ok(None)` when no record matches. Must not treat zero matches
    /// as an error.
    async fn find_one(&self, kind: &str, field: &str, value: &str)
        -> BindResult<Option<Entity>>;

    /// Looks up exactly like [`find_one`](EntityStore::find_one) but requires
    /// a record to exist.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::DoesNotExist`] when no record matches.
    async fn get_one(&self, kind: &str, field: &str, value: &str) -> BindResult<Entity> {
        self.find_one(kind, field, value).await?.ok_or_else(|| {
            BindError::DoesNotExist(format!("{kind} with {field}='{value}'"))
        })
    }
}
