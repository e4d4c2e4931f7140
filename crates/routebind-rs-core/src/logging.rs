//! Logging integration for routebind-rs.
//!
//! Provides helpers for configuring [`tracing`]-based logging and for creating
//! per-dispatch spans so that every log line emitted while a request walks the
//! candidate routes carries the requested path.

/// Sets up the global tracing subscriber.
///
/// `filter` is an env-filter directive string (e.g. `"debug"`,
/// `"routebind_rs_binding=trace"`). With `pretty` set a human-readable format
/// is used; otherwise output is structured JSON suitable for production log
/// shipping.
///
/// Installing a second subscriber is a no-op, so this is safe to call from
/// multiple tests.
pub fn setup_logging(filter: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one route-matching pass over a requested path.
///
/// # Examples
///
/// ```
/// use routebind_rs_core::logging::dispatch_span;
///
/// let span = dispatch_span("/acme");
/// let _guard = span.enter();
/// tracing::debug!("trying candidate routes");
/// ```
pub fn dispatch_span(path: &str) -> tracing::Span {
    tracing::debug_span!("dispatch", path = path)
}
