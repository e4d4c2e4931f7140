//! Binder specifications.
//!
//! A [`BinderSpec`] describes how one route parameter resolves to a persisted
//! entity: either a declarative entity lookup (`"Organization@name"`-style) or
//! a caller-supplied resolver function. The variant is decided once at
//! configuration time; the matching path only pattern-matches on it.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;

use routebind_rs_core::{BindError, BindResult};
use routebind_rs_store::Entity;

/// The boxed future returned by a custom resolver function.
pub type BoxResolveFuture = Pin<Box<dyn Future<Output = BindResult<Option<Entity>>> + Send>>;

/// The type for caller-supplied resolver functions.
///
/// A resolver takes the raw URL-segment value and returns the resolved entity
/// or `None` for "no result, try the next route". It is wrapped in an `Arc`
/// so it can be shared across concurrent match attempts.
pub type ResolverFn = Arc<dyn Fn(&str) -> BoxResolveFuture + Send + Sync>;

/// How one route parameter resolves to an entity.
///
/// # Examples
///
/// ```
/// use routebind_rs_binding::spec::BinderSpec;
///
/// // Look up a User by its username field.
/// let by_field: BinderSpec = "User@username".parse().unwrap();
///
/// // Look up a Page by its store-designated route key.
/// let by_route_key: BinderSpec = "Page".parse().unwrap();
///
/// assert_eq!(by_field.to_string(), "User@username");
/// assert_eq!(by_route_key.to_string(), "Page");
/// ```
#[derive(Clone)]
pub enum BinderSpec {
    /// Resolve by querying the entity store.
    EntityLookup {
        /// The entity kind to query (logical table or collection name).
        kind: String,
        /// The field to match the raw value against. `None` means the
        /// store's designated route key for this kind.
        key_field: Option<String>,
    },
    /// Resolve via a caller-supplied function.
    CustomResolver(ResolverFn),
}

impl BinderSpec {
    /// Creates an entity-lookup spec using the store's route key.
    pub fn lookup(kind: impl Into<String>) -> Self {
        Self::EntityLookup {
            kind: kind.into(),
            key_field: None,
        }
    }

    /// Creates an entity-lookup spec matching against an explicit field.
    pub fn lookup_by(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::EntityLookup {
            kind: kind.into(),
            key_field: Some(field.into()),
        }
    }

    /// Creates a custom-resolver spec from an async function.
    ///
    /// The function receives the raw URL-segment value. Returning `Ok(None)`
    /// means "no result"; any `Err` is a hard failure that propagates to the
    /// host unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use routebind_rs_binding::spec::BinderSpec;
    /// use routebind_rs_store::Entity;
    ///
    /// let spec = BinderSpec::custom(|raw| async move {
    ///     if raw == "acme" {
    ///         Ok(Some(Entity::new("Organization").with("name", "acme")))
    ///     } else {
    ///         Ok(None)
    ///     }
    /// });
    /// ```
    pub fn custom<F, Fut>(resolve: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = BindResult<Option<Entity>>> + Send + 'static,
    {
        Self::CustomResolver(Arc::new(move |raw: &str| Box::pin(resolve(raw.to_string()))))
    }
}

impl FromStr for BinderSpec {
    type Err = BindError;

    /// Parses `"Kind@field"` and bare `"Kind"` spec strings.
    fn from_str(s: &str) -> BindResult<Self> {
        let s = s.trim();
        match s.split_once('@') {
            Some((kind, field)) => {
                let (kind, field) = (kind.trim(), field.trim());
                if kind.is_empty() || field.is_empty() {
                    return Err(BindError::ImproperlyConfigured(format!(
                        "Binder spec '{s}' must be 'Kind' or 'Kind@field'"
                    )));
                }
                Ok(Self::lookup_by(kind, field))
            }
            None => {
                if s.is_empty() {
                    return Err(BindError::ImproperlyConfigured(
                        "Binder spec must not be empty".to_string(),
                    ));
                }
                Ok(Self::lookup(s))
            }
        }
    }
}

impl fmt::Display for BinderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityLookup {
                kind,
                key_field: Some(field),
            } => write!(f, "{kind}@{field}"),
            Self::EntityLookup {
                kind,
                key_field: None,
            } => write!(f, "{kind}"),
            Self::CustomResolver(_) => write!(f, "<custom resolver>"),
        }
    }
}

impl fmt::Debug for BinderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityLookup { kind, key_field } => f
                .debug_struct("EntityLookup")
                .field("kind", kind)
                .field("key_field", key_field)
                .finish(),
            Self::CustomResolver(_) => f.debug_tuple("CustomResolver").finish_non_exhaustive(),
        }
    }
}
