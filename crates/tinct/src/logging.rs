//! Diagnostics on stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `tinct=debug`.
pub const LOG_ENV: &str = "TINCT_LOG";

/// `--verbose` forces `debug`; otherwise `TINCT_LOG` applies, falling back to
/// `warn` so that skipped colors are still reported.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn setup_logging(verbose: bool) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(layer)
        .init();
}
