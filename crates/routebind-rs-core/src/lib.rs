//! # routebind-rs-core
//!
//! Error types, result alias, and logging setup for routebind-rs. This crate
//! has zero framework dependencies and provides the foundation for the store
//! and binding crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and the [`BindResult`] alias
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used types at the crate root.
pub use error::{BindError, BindResult};
