//! # routebind-rs-binding
//!
//! Entity-backed route matching with fall-through continuation, similar in
//! spirit to Laravel-style implicit route model binding but decided during
//! the host router's matching phase. When several routes share a path shape
//! (`/{username}` for users, `/{orgname}` for organizations), a route whose
//! bound parameter resolves to no persisted entity is passed over and the
//! dispatch engine continues with the next candidate, instead of answering
//! "not found" outright.
//!
//! ## Modules
//!
//! - [`spec`] - [`BinderSpec`]: how one parameter resolves to an entity
//! - [`registry`] - [`BinderRegistry`]: ordered binder mapping and ignored paths
//! - [`resolver`] - [`BindingResolver`]: raw value + spec -> entity or none
//! - [`predicate`] - [`RouteMatchPredicate`] and the host-facing traits
//! - [`config`] - declarative TOML configuration
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use routebind_rs_binding::predicate::{RouteMatchPredicate, ValidatorSet};
//! use routebind_rs_binding::registry::BinderRegistry;
//! use routebind_rs_binding::spec::BinderSpec;
//! use routebind_rs_store::MemoryStore;
//!
//! let mut registry = BinderRegistry::new();
//! registry.set_binders(vec![
//!     ("user".to_string(), BinderSpec::lookup_by("User", "username")),
//!     ("organization".to_string(), BinderSpec::lookup_by("Organization", "name")),
//! ]);
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut validators = ValidatorSet::new();
//! validators.add(RouteMatchPredicate::new(Arc::new(registry), store));
//! // Hand `validators` to the dispatch engine's matching phase.
//! ```

pub mod config;
pub mod predicate;
pub mod registry;
pub mod resolver;
pub mod spec;

// Re-export the most commonly used types at the crate root.
pub use config::BindingConfig;
pub use predicate::{MatchValidator, Route, RouteMatchPredicate, ValidatorSet};
pub use registry::BinderRegistry;
pub use resolver::BindingResolver;
pub use spec::BinderSpec;
