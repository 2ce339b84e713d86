use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter, e.g. `POMO_LOG=pomo=trace`.
pub const LOG_ENV: &str = "POMO_LOG";

/// Install the stderr log subscriber.
///
/// Defaults to warnings only; `verbose` raises pomo's own logs to debug.
pub fn init(verbose: bool) {
    let default = if verbose { "warn,pomo=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when pomo runs as a library.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
