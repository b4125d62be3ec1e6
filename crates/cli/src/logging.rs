use tracing_subscriber::EnvFilter;

/// Initialize console logging.
///
/// Defaults to `warn` so normal command output stays clean; set
/// `RUST_LOG=debug` to see storage and provider internals on stderr.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
