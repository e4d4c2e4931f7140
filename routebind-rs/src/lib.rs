//! # routebind-rs
//!
//! Entity-backed route matching with fall-through continuation.
//!
//! When several routes share a path shape (`/{username}` for users,
//! `/{orgname}` for organizations) but are backed by different lookup tables,
//! the match predicate in this workspace lets a route whose bound parameter
//! resolves to no persisted entity be passed over, so the host dispatch
//! engine continues with the next candidate instead of failing the request.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `routebind-rs` for everything, or on individual crates
//! for finer-grained control.

/// Error types, result alias, and logging setup.
pub use routebind_rs_core as core;

/// Entity store abstraction: values, `Entity`, `EntityStore`, in-memory store.
#[cfg(feature = "store")]
pub use routebind_rs_store as store;

/// Binder specs, registry, resolver, and the route-continuation predicate.
#[cfg(feature = "binding")]
pub use routebind_rs_binding as binding;

/// Test tooling: lookup counting, assertions, test routes, dispatcher.
#[cfg(feature = "testing")]
pub use routebind_rs_test as test;
