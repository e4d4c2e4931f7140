//! # routebind-rs-test
//!
//! Test tooling for routebind-rs: a lookup-counting store decorator,
//! lookup-count assertions, a pattern-backed [`TestRoute`], and a reference
//! [`TestDispatcher`] that plays the host dispatch engine in integration
//! tests.
//!
//! ## Modules
//!
//! - [`store`] - [`CountingStore`] lookup-counting decorator
//! - [`assertions`] - [`assert_num_lookups`] / [`assert_max_lookups`]
//! - [`route`] - [`TestRoute`], a `"/{param}"` pattern route
//! - [`dispatch`] - [`TestDispatcher`], ordered-candidate dispatch loop

pub mod assertions;
pub mod dispatch;
pub mod route;
pub mod store;

// Re-export the most commonly used items at the crate root.
pub use assertions::{assert_max_lookups, assert_num_lookups};
pub use dispatch::TestDispatcher;
pub use route::TestRoute;
pub use store::CountingStore;
