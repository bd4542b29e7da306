//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber.
///
/// `default_directive` is used when `RUST_LOG` is unset; the environment
/// variable always wins when present.
pub fn init_tracing(default_directive: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
