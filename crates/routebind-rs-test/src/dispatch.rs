//! Reference dispatch loop.
//!
//! [`TestDispatcher`] plays the host dispatch engine in integration tests:
//! candidate routes are tried strictly in declaration order, each one first
//! shape-matched against the requested path and then put to the
//! [`ValidatorSet`]. The first route that passes both wins and no later route
//! is evaluated; when every candidate is exhausted the dispatch falls through
//! to the host's not-found handling, represented here as `Ok(None)`.

use tracing::Instrument;

use routebind_rs_binding::ValidatorSet;
use routebind_rs_core::logging::dispatch_span;
use routebind_rs_core::BindResult;

use crate::route::TestRoute;

/// An ordered-candidate dispatcher over [`TestRoute`]s.
///
/// # Examples
///
/// ```
/// use routebind_rs_binding::ValidatorSet;
/// use routebind_rs_test::dispatch::TestDispatcher;
/// use routebind_rs_test::route::TestRoute;
///
/// # fn example() -> routebind_rs_core::BindResult<()> {
/// let mut dispatcher = TestDispatcher::new(ValidatorSet::new());
/// dispatcher.add(TestRoute::new("home", "/")?);
/// dispatcher.add(TestRoute::new("user", "/{username}")?);
/// # Ok(())
/// # }
/// ```
pub struct TestDispatcher {
    routes: Vec<TestRoute>,
    validators: ValidatorSet,
}

impl TestDispatcher {
    /// Creates a dispatcher with the given validator set.
    pub fn new(validators: ValidatorSet) -> Self {
        Self {
            routes: Vec::new(),
            validators,
        }
    }

    /// Appends a candidate route. Declaration order is match order.
    pub fn add(&mut self, route: TestRoute) {
        self.routes.push(route);
    }

    /// Returns the number of candidate routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Dispatches a requested path.
    ///
    /// Returns the winning route, or `Ok(None)` when no candidate matched —
    /// the point where a real host would render its standard 404 response.
    ///
    /// # Errors
    ///
    /// Propagates hard failures (store connectivity, custom resolver errors)
    /// from the validators unmodified.
    pub async fn dispatch(&mut self, path: &str) -> BindResult<Option<&TestRoute>> {
        let span = dispatch_span(path);
        async {
            let mut winner = None;
            for idx in 0..self.routes.len() {
                if !self.routes[idx].matches_path(path) {
                    continue;
                }
                if self.validators.passes(&mut self.routes[idx], path).await? {
                    winner = Some(idx);
                    break;
                }
            }
            if winner.is_none() {
                tracing::debug!(path, "no candidate route matched");
            }
            Ok(winner.map(|idx| &self.routes[idx]))
        }
        .instrument(span)
        .await
    }
}
