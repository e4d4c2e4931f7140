//! The binder registry.
//!
//! [`BinderRegistry`] holds the ordered parameter-name -> [`BinderSpec`]
//! mapping plus the list of ignored path prefixes. Both collections are
//! replaced wholesale by their `set_*` operations; there is no incremental
//! update. The registry is plain data: hosts build it at startup, wrap it in
//! an `Arc`, and hand it to the predicate. Reconfiguration while requests are
//! in flight means building a fresh registry and a fresh predicate around it.

use crate::spec::BinderSpec;

/// Ordered mapping of route parameter names to binder specifications,
/// plus the ignored-path prefix list.
///
/// Registry order matters: when a route declares more than one bound
/// parameter, the first registry entry the route declares governs the match.
///
/// # Examples
///
/// ```
/// use routebind_rs_binding::registry::BinderRegistry;
/// use routebind_rs_binding::spec::BinderSpec;
///
/// let mut registry = BinderRegistry::new();
/// registry.set_binders(vec![
///     ("user".to_string(), BinderSpec::lookup_by("User", "username")),
///     ("organization".to_string(), BinderSpec::lookup_by("Organization", "name")),
/// ]);
/// registry.set_ignored_paths(vec!["api".to_string()]);
///
/// assert!(registry.binder("user").is_some());
/// assert!(registry.is_ignored("/api/users"));
/// assert!(!registry.is_ignored("/apify"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct BinderRegistry {
    binders: Vec<(String, BinderSpec)>,
    ignored_paths: Vec<String>,
}

impl BinderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire binder mapping.
    ///
    /// Duplicate parameter names follow ordinary mapping semantics: the last
    /// spec wins, at the position where the name first appeared.
    pub fn set_binders(&mut self, binders: Vec<(String, BinderSpec)>) {
        let mut deduped: Vec<(String, BinderSpec)> = Vec::with_capacity(binders.len());
        for (name, spec) in binders {
            if let Some(existing) = deduped.iter_mut().find(|(n, _)| *n == name) {
                existing.1 = spec;
            } else {
                deduped.push((name, spec));
            }
        }
        self.binders = deduped;
    }

    /// Returns the binder mapping in registry order.
    pub fn binders(&self) -> &[(String, BinderSpec)] {
        &self.binders
    }

    /// Returns the spec registered for a parameter name, if any.
    pub fn binder(&self, name: &str) -> Option<&BinderSpec> {
        self.binders
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Returns the governing binder for a route's declared parameters.
    ///
    /// Walks the registry in its defined order and returns the first entry
    /// whose parameter the route declares. Later registered parameters the
    /// route also declares are ignored for continuation purposes; routes are
    /// expected to carry at most one bound parameter.
    pub fn governing_binder<'a>(
        &'a self,
        declared: &[String],
    ) -> Option<(&'a str, &'a BinderSpec)> {
        self.binders
            .iter()
            .find(|(name, _)| declared.iter().any(|d| d == name))
            .map(|(name, spec)| (name.as_str(), spec))
    }

    /// Replaces the entire ignored-path list.
    pub fn set_ignored_paths(&mut self, paths: Vec<String>) {
        self.ignored_paths = paths;
    }

    /// Returns the ignored-path prefixes in declaration order.
    pub fn ignored_paths(&self) -> &[String] {
        &self.ignored_paths
    }

    /// Returns `true` if the requested path falls under an ignored prefix.
    ///
    /// Matching is prefix-based on whole path segments: both sides are
    /// trimmed of surrounding slashes and given a trailing slash before the
    /// prefix comparison, so an ignored `"nova"` covers `/nova` and
    /// `/nova/x` but never `/novax`.
    pub fn is_ignored(&self, path: &str) -> bool {
        let candidate = segment_normalize(path);
        self.ignored_paths
            .iter()
            .any(|prefix| candidate.starts_with(&segment_normalize(prefix)))
    }
}

/// Trims surrounding slashes and appends a trailing slash, forcing prefix
/// comparisons onto segment boundaries.
fn segment_normalize(path: &str) -> String {
    let mut normalized = path.trim_matches('/').to_string();
    normalized.push('/');
    normalized
}
