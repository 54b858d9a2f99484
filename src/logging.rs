use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics on stderr, filtered by `RUST_LOG` (default "warn").
///
/// Stdout is reserved for the interactive dialog and the reports, so nothing
/// below `warn` shows up unless explicitly requested.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (tests, embedding) is not an error worth reporting
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
