use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Filtering is driven by `RUST_LOG`, defaulting to `info` when unset.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
