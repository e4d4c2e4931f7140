//! Pattern-backed test route.
//!
//! [`TestRoute`] is a small host-route stand-in for integration tests: a
//! `"/{username}"`-style segment pattern compiled to a regex, a raw parameter
//! bag populated on bind, and the resolved-entity slots the predicate
//! installs into. Real hosts adapt their own route type to
//! [`Route`](routebind_rs_binding::Route) instead.

use std::collections::HashMap;
use std::fmt;
use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;

use routebind_rs_binding::Route;
use routebind_rs_core::{BindError, BindResult};
use routebind_rs_store::Entity;

static PARAM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("parameter name regex"));

/// A candidate route for tests: named, pattern-matched, with parameter bags.
///
/// Patterns are plain path segments with `{name}` placeholders, each matching
/// one non-empty segment:
///
/// ```
/// use routebind_rs_test::route::TestRoute;
///
/// let route = TestRoute::new("user-profile", "/{username}").unwrap();
/// assert!(route.matches_path("/alice"));
/// assert!(!route.matches_path("/alice/posts"));
/// ```
pub struct TestRoute {
    name: String,
    pattern: String,
    regex: Regex,
    param_names: Vec<String>,
    raw: HashMap<String, String>,
    resolved: HashMap<String, Entity>,
}

impl fmt::Debug for TestRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRoute")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("param_names", &self.param_names)
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}

impl TestRoute {
    /// Compiles a segment pattern into a route.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ImproperlyConfigured`] on unclosed braces,
    /// invalid parameter names, or duplicate parameters.
    pub fn new(name: &str, pattern: &str) -> BindResult<Self> {
        let (regex, param_names) = compile_pattern(pattern)?;
        Ok(Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            regex,
            param_names,
            raw: HashMap::new(),
            resolved: HashMap::new(),
        })
    }

    /// Returns the route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` if the path matches this route's shape.
    ///
    /// Shape matching is what the host engine does before consulting match
    /// validators; it says nothing about entity existence.
    pub fn matches_path(&self, path: &str) -> bool {
        self.regex.is_match(&normalize(path))
    }

    /// Returns the entity installed for a parameter, if the predicate
    /// resolved one.
    pub fn resolved(&self, name: &str) -> Option<&Entity> {
        self.resolved.get(name)
    }
}

impl Route for TestRoute {
    fn parameter_names(&self) -> Vec<String> {
        self.param_names.clone()
    }

    fn bind(&mut self, path: &str) {
        self.raw.clear();
        self.resolved.clear();
        if let Some(captures) = self.regex.captures(&normalize(path)) {
            for name in &self.param_names {
                if let Some(m) = captures.name(name) {
                    self.raw.insert(name.clone(), m.as_str().to_string());
                }
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

/// Normalizes a path to a leading slash and no trailing slash.
fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Compiles a `{name}` segment pattern into an anchored regex and the ordered
/// parameter names.
fn compile_pattern(pattern: &str) -> BindResult<(Regex, Vec<String>)> {
    let normalized = normalize(pattern);
    let mut regex_str = String::from("^");
    let mut param_names = Vec::new();
    let mut remaining = normalized.as_str();

    while !remaining.is_empty() {
        if let Some(start) = remaining.find('{') {
            regex_str.push_str(&regex::escape(&remaining[..start]));

            let end = remaining[start..].find('}').ok_or_else(|| {
                BindError::ImproperlyConfigured(format!("Unclosed brace in pattern: {pattern}"))
            })? + start;

            let name = &remaining[start + 1..end];
            if !PARAM_NAME.is_match(name) {
                return Err(BindError::ImproperlyConfigured(format!(
                    "Invalid parameter name '{name}' in pattern: {pattern}"
                )));
            }
            if param_names.iter().any(|n| n == name) {
                return Err(BindError::ImproperlyConfigured(format!(
                    "Duplicate parameter '{name}' in pattern: {pattern}"
                )));
            }

            write!(regex_str, "(?P<{name}>[^/]+)").ok();
            param_names.push(name.to_string());
            remaining = &remaining[end + 1..];
        } else {
            regex_str.push_str(&regex::escape(remaining));
            break;
        }
    }

    regex_str.push('$');
    let regex = Regex::new(&regex_str).map_err(|e| {
        BindError::ImproperlyConfigured(format!("Invalid pattern regex: {e}"))
    })?;
    Ok((regex, param_names))
}
