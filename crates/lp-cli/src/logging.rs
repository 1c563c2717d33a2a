use tracing_subscriber::EnvFilter;

pub(crate) const LOG_ENV: &str = "LISTPATH_LOG";

/// Installs the stderr subscriber; a second call is a no-op.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
