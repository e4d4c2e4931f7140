//! Binding resolution.
//!
//! [`BindingResolver`] turns a raw URL-segment value and a [`BinderSpec`]
//! into a resolved [`Entity`] or "not found". It performs exactly one store
//! query (or one custom-resolver invocation) per call; callers are expected
//! to cache the result rather than resolve twice.

use std::sync::Arc;

use routebind_rs_core::BindResult;
use routebind_rs_store::{Entity, EntityStore};

use crate::spec::BinderSpec;

/// Resolves raw parameter values against an entity store.
pub struct BindingResolver {
    store: Arc<dyn EntityStore>,
}

impl BindingResolver {
    /// Creates a resolver backed by the given store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &Arc<dyn EntityStore> {
        &self.store
    }

    /// Resolves `raw` according to `spec`.
    ///
    /// For [`BinderSpec::EntityLookup`] this issues a single
    /// [`find_one`](EntityStore::find_one) query against the explicit key
    /// field, falling back to the store's designated route key for the kind.
    /// Zero matches are the ordinary `Ok(None)` outcome, never an error.
    ///
    /// For [`BinderSpec::CustomResolver`] the supplied function is invoked
    /// once; its "no result" return passes through unchanged and its errors
    /// propagate unmodified.
    ///
    /// # Errors
    ///
    /// Store connectivity failures and custom resolver failures bubble up to
    /// the caller; resolution never retries.
    pub async fn resolve(&self, raw: &str, spec: &BinderSpec) -> BindResult<Option<Entity>> {
        match spec {
            BinderSpec::EntityLookup { kind, key_field } => {
                let field = key_field
                    .clone()
                    .unwrap_or_else(|| self.store.route_key(kind));
                self.store.find_one(kind, &field, raw).await
            }
            BinderSpec::CustomResolver(resolve) => resolve(raw).await,
        }
    }
}
