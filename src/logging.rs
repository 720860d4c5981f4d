//! Diagnostics setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr tracing subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for the session transcript.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
