use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. Diagnostics go to stderr so the narrative on
/// stdout stays the same from run to run. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
