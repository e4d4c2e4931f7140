//! The route-continuation match predicate.
//!
//! This module defines the extension point a host dispatch engine consults
//! while walking its candidate routes in declaration order:
//!
//! - [`Route`] is the capability surface the predicate needs from the host's
//!   route object: declared parameter names, a bind step, raw parameter
//!   access, and an explicit "install resolved entity" operation.
//! - [`MatchValidator`] is the predicate contract; the engine keeps an
//!   ordered [`ValidatorSet`] of these and accepts the first candidate route
//!   for which every validator passes.
//! - [`RouteMatchPredicate`] is the validator implemented here: it accepts
//!   binding-free routes unconditionally, and for routes with a governing
//!   binder it resolves the raw parameter against the entity store, rejecting
//!   the route (so the engine tries the next one) when no entity matches.

use std::sync::Arc;

use async_trait::async_trait;

use routebind_rs_core::BindResult;
use routebind_rs_store::{Entity, EntityStore};

use crate::registry::BinderRegistry;
use crate::resolver::BindingResolver;

/// The capabilities the match predicate needs from a host route.
///
/// Hosts keep ownership of their route objects; the predicate only reads the
/// declared parameters, triggers the route's own bind step, and installs the
/// resolved entity through `set_resolved` — no host internals are reached
/// into.
pub trait Route: Send {
    /// Parameter names declared by the route's compiled pattern.
    fn parameter_names(&self) -> Vec<String>;

    /// Binds the route to the requested path, populating raw parameter
    /// values. Called before [`parameter`](Route::parameter); the route owns
    /// how extraction happens.
    fn bind(&mut self, path: &str);

    /// Returns the raw string captured for a parameter, after `bind`.
    fn parameter(&self, name: &str) -> Option<&str>;

    /// Replaces the raw value of `name` with its resolved entity, so
    /// downstream consumers read the entity instead of repeating the lookup.
    fn set_resolved(&mut self, name: &str, entity: Entity);
}

/// A pass/fail vote on one candidate route for one requested path.
///
/// Validators run inside the host's matching phase, after the route's path
/// pattern has already matched the request shape. Returning `Ok(false)` tells
/// the engine to continue with the next candidate route; errors propagate to
/// the engine's own error handling.
#[async_trait]
pub trait MatchValidator: Send + Sync {
    /// Decides whether the candidate route should win the dispatch.
    async fn matches(&self, route: &mut dyn Route, path: &str) -> BindResult<bool>;
}

/// An ordered, additive collection of match validators.
///
/// Registration appends; hosts typically register validators once at startup,
/// before serving. A route passes when every validator accepts it.
#[derive(Default)]
pub struct ValidatorSet {
    validators: Vec<Box<dyn MatchValidator>>,
}

impl ValidatorSet {
    /// Creates an empty validator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validator to the set.
    pub fn add(&mut self, validator: impl MatchValidator + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Returns the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if no validators are registered.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every validator against the candidate route, in registration
    /// order, short-circuiting on the first rejection.
    pub async fn passes(&self, route: &mut dyn Route, path: &str) -> BindResult<bool> {
        for validator in &self.validators {
            if !validator.matches(&mut *route, path).await? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// The entity-binding match validator.
///
/// For each candidate route, the predicate looks for a governing binder: the
/// first registry entry whose parameter the route declares. Routes without
/// one are accepted unconditionally. Routes with one are accepted if the raw
/// parameter value resolves to an entity (which is installed into the route's
/// parameter bag, so the lookup runs at most once per route and request), and
/// rejected with no side effects if it does not.
///
/// Requested paths under an ignored prefix are exempt: such routes are
/// accepted without any entity lookup.
pub struct RouteMatchPredicate {
    registry: Arc<BinderRegistry>,
    resolver: BindingResolver,
}

impl RouteMatchPredicate {
    /// Creates a predicate over the given registry and entity store.
    pub fn new(registry: Arc<BinderRegistry>, store: Arc<dyn EntityStore>) -> Self {
        Self {
            registry,
            resolver: BindingResolver::new(store),
        }
    }

    /// Returns the binder registry this predicate consults.
    pub fn registry(&self) -> &Arc<BinderRegistry> {
        &self.registry
    }
}

#[async_trait]
impl MatchValidator for RouteMatchPredicate {
    async fn matches(&self, route: &mut dyn Route, path: &str) -> BindResult<bool> {
        let declared = route.parameter_names();
        let Some((name, spec)) = self.registry.governing_binder(&declared) else {
            // Binding-free routes are never rejected by this mechanism.
            return Ok(true);
        };

        if self.registry.is_ignored(path) {
            tracing::debug!(path, "ignored path, accepting without lookup");
            return Ok(true);
        }

        // Parameter extraction requires the route's own bind step first.
        route.bind(path);
        let Some(raw) = route.parameter(name).map(ToString::to_string) else {
            // Nothing captured for the bound parameter; nothing to resolve.
            return Ok(true);
        };

        match self.resolver.resolve(&raw, spec).await? {
            Some(entity) => {
                route.set_resolved(name, entity);
                Ok(true)
            }
            None => {
                tracing::debug!(
                    parameter = name,
                    value = %raw,
                    "no entity matched, passing route over"
                );
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::spec::BinderSpec;
    use routebind_rs_core::BindError;
    use routebind_rs_store::MemoryStore;

    /// A minimal host route: one `{param}` segment pattern.
    struct StubRoute {
        params: Vec<String>,
        raw: HashMap<String, String>,
        resolved: HashMap<String, Entity>,
        bound: bool,
    }

    impl StubRoute {
        fn with_param(name: &str) -> Self {
            Self {
                params: vec![name.to_string()],
                raw: HashMap::new(),
                resolved: HashMap::new(),
                bound: false,
            }
        }

        fn without_params() -> Self {
            Self {
                params: Vec::new(),
                raw: HashMap::new(),
                resolved: HashMap::new(),
                bound: false,
            }
        }
    }

    impl Route for StubRoute {
        fn parameter_names(&self) -> Vec<String> {
            self.params.clone()
        }

        fn bind(&mut self, path: &str) {
            self.bound = true;
            // Single-segment capture into the first declared parameter.
            if let Some(name) = self.params.first() {
                let segment = path.trim_matches('/');
                if !segment.is_empty() && !segment.contains('/') {
                    self.raw.insert(name.clone(), segment.to_string());
                }
            }
        }

        fn parameter(&self, name: &str) -> Option<&str> {
            self.raw.get(name).map(String::as_str)
        }

        fn set_resolved(&mut self, name: &str, entity: Entity) {
            self.raw.remove(name);
            self.resolved.insert(name.to_string(), entity);
        }
    }

    /// Store wrapper that counts `find_one` invocations.
    struct CountingStub {
        inner: MemoryStore,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl EntityStore for CountingStub {
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

    fn counting_store() -> Arc<CountingStub> {
        let inner = MemoryStore::new();
        inner.insert(Entity::new("User").with("id", 1_i64).with("username", "alice"));
        Arc::new(CountingStub {
            inner,
            lookups: AtomicUsize::new(0),
        })
    }

    fn predicate_with(
        binders: Vec<(&str, BinderSpec)>,
        ignored: Vec<&str>,
        store: Arc<dyn EntityStore>,
    ) -> RouteMatchPredicate {
        let mut registry = BinderRegistry::new();
        registry.set_binders(
            binders
                .into_iter()
                .map(|(n, s)| (n.to_string(), s))
                .collect(),
        );
        registry.set_ignored_paths(ignored.into_iter().map(String::from).collect());
        RouteMatchPredicate::new(Arc::new(registry), store)
    }

    #[tokio::test]
    async fn test_binding_free_route_always_accepted() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec![],
            store.clone(),
        );

        let mut route = StubRoute::without_params();
        assert!(predicate.matches(&mut route, "/anything").await.unwrap());
        // No binder governs, so no bind and no lookup happened.
        assert!(!route.bound);
        assert_eq!(store.lookups.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_unregistered_parameter_accepted_without_lookup() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec![],
            store.clone(),
        );

        let mut route = StubRoute::with_param("year");
        assert!(predicate.matches(&mut route, "/2024").await.unwrap());
        assert_eq!(store.lookups.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_entity_found_accepts_and_installs() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec![],
            store.clone(),
        );

        let mut route = StubRoute::with_param("user");
        assert!(predicate.matches(&mut route, "/alice").await.unwrap());

        // Raw value replaced by the resolved entity, exactly one lookup.
        assert!(route.parameter("user").is_none());
        let entity = route.resolved.get("user").unwrap();
        assert_eq!(entity.get_str("username"), Some("alice"));
        assert_eq!(store.lookups.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_entity_missing_rejects_without_side_effects() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec![],
            store.clone(),
        );

        let mut route = StubRoute::with_param("user");
        assert!(!predicate.matches(&mut route, "/ghost").await.unwrap());
        assert!(route.resolved.is_empty());
    }

    #[tokio::test]
    async fn test_ignored_path_accepts_without_lookup() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec!["foo"],
            store.clone(),
        );

        // No User named "foo" exists, but the path is exempt.
        let mut route = StubRoute::with_param("user");
        assert!(predicate.matches(&mut route, "/foo").await.unwrap());
        assert_eq!(store.lookups.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_ignored_prefix_respects_segment_boundary() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec!["nova"],
            store.clone(),
        );

        let mut route = StubRoute::with_param("user");
        // "/novax" is not under "nova", so the lookup runs and misses.
        assert!(!predicate.matches(&mut route, "/novax").await.unwrap());
        assert_eq!(store.lookups.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_missing_raw_value_accepted_without_lookup() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec![],
            store.clone(),
        );

        // Two-segment path: the stub captures nothing for "user".
        let mut route = StubRoute::with_param("user");
        assert!(predicate.matches(&mut route, "/a/b").await.unwrap());
        assert!(route.bound);
        assert_eq!(store.lookups.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_first_registry_entry_governs() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![
                ("user", BinderSpec::lookup_by("User", "username")),
                ("organization", BinderSpec::lookup_by("Organization", "name")),
            ],
            vec![],
            store.clone(),
        );

        // Route declares both parameters; only the "user" binder is applied,
        // so a single lookup runs even though two binders could match.
        let mut route = StubRoute::with_param("user");
        route.params.push("organization".to_string());
        assert!(predicate.matches(&mut route, "/alice").await.unwrap());
        assert_eq!(store.lookups.load(Ordering::Relaxed), 1);
        assert!(route.resolved.contains_key("user"));
        assert!(!route.resolved.contains_key("organization"));
    }

    #[tokio::test]
    async fn test_custom_resolver_error_propagates() {
        let store = counting_store();
        let predicate = predicate_with(
            vec![(
                "user",
                BinderSpec::custom(|_raw| async {
                    Err(BindError::ResolverFailed("boom".to_string()))
                }),
            )],
            vec![],
            store,
        );

        let mut route = StubRoute::with_param("user");
        let err = predicate.matches(&mut route, "/alice").await.unwrap_err();
        assert!(matches!(err, BindError::ResolverFailed(_)));
    }

    #[tokio::test]
    async fn test_validator_set_runs_in_order() {
        let store = counting_store();
        let mut validators = ValidatorSet::new();
        assert!(validators.is_empty());
        validators.add(predicate_with(
            vec![("user", BinderSpec::lookup_by("User", "username"))],
            vec![],
            store,
        ));
        assert_eq!(validators.len(), 1);

        let mut hit = StubRoute::with_param("user");
        assert!(validators.passes(&mut hit, "/alice").await.unwrap());

        let mut miss = StubRoute::with_param("user");
        assert!(!validators.passes(&mut miss, "/ghost").await.unwrap());
    }
}
