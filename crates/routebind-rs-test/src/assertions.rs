//! Lookup counting assertions.
//!
//! Provides [`assert_num_lookups`], which counts entity lookups executed
//! during an async closure and asserts the count matches an expected value.
//! This is how the at-most-once-lookup guarantee stays tested.

use std::future::Future;

use routebind_rs_store::EntityStore;

use crate::store::CountingStore;

/// Asserts that exactly `expected_count` entity lookups are executed during
/// the async closure.
///
/// Resets the counter on the [`CountingStore`] before executing the closure,
/// then checks it after execution.
///
/// # Panics
///
/// Panics if the number of lookups does not match `expected_count`.
pub async fn assert_num_lookups<S, F, Fut>(
    store: &CountingStore<S>,
    expected_count: usize,
    f: F,
) where
    S: EntityStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    store.reset_lookup_count();
    f().await;
    let actual = store.lookup_count();
    assert_eq!(
        actual, expected_count,
        "Expected {expected_count} entity lookups, but {actual} were executed"
    );
}

/// Asserts that at most `max_count` entity lookups are executed during the
/// async closure.
///
/// # Panics
///
/// Panics if more than `max_count` lookups are executed.
pub async fn assert_max_lookups<S, F, Fut>(store: &CountingStore<S>, max_count: usize, f: F)
where
    S: EntityStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    store.reset_lookup_count();
    f().await;
    let actual = store.lookup_count();
    assert!(
        actual <= max_count,
        "Expected at most {max_count} entity lookups, but {actual} were executed"
    );
}
