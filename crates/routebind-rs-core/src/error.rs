//! Core error types for routebind-rs.
//!
//! This module provides the [`BindError`] enum covering store failures,
//! caller-supplied resolver failures, and configuration errors, together with
//! the [`BindResult`] alias used throughout the workspace.
//!
//! A failed entity lookup is deliberately *not* an error in the matching path:
//! the resolver reports it as `Ok(None)` and the predicate turns it into a
//! rejected match, so the dispatch engine can continue with the next candidate
//! route. [`BindError::DoesNotExist`] exists for the store's "must exist"
//! convenience accessors only.

use thiserror::Error;

/// The primary error type for routebind-rs.
///
/// Everything except [`BindError::DoesNotExist`] is fatal from the point of
/// view of route matching: the predicate propagates these unmodified to the
/// host dispatch engine, which owns retry and rendering policy.
#[derive(Error, Debug)]
pub enum BindError {
    /// A store accessor that requires a row found none.
    #[error("Entity does not exist: {0}")]
    DoesNotExist(String),

    /// The entity store could not be reached or rejected the query.
    #[error("Entity store unavailable: {0}")]
    StoreUnavailable(String),

    /// A caller-supplied resolver function failed.
    ///
    /// Resolver failures are programmer errors in host code; they are never
    /// retried and never converted into a rejected match.
    #[error("Custom resolver failed: {0}")]
    ResolverFailed(String),

    /// A binder spec string, registry entry, or configuration file is invalid.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    /// An I/O error occurred while loading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BindError {
    /// Returns the HTTP status a host would typically render for this error.
    ///
    /// Hosts are free to apply their own policy; this is the conventional
    /// mapping:
    ///
    /// - `DoesNotExist` -> 404
    /// - Everything else -> 500
    pub const fn status_hint(&self) -> u16 {
        match self {
            Self::DoesNotExist(_) => 404,
            Self::StoreUnavailable(_)
            | Self::ResolverFailed(_)
            | Self::ImproperlyConfigured(_)
            | Self::Io(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, BindError>`.
pub type BindResult<T> = Result<T, BindError>;
