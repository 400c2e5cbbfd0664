//! Logging setup using tracing.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `verbosity` is the number of `-v` flags (0=warn, 1=info, 2=debug, 3+=trace).
/// `RUST_LOG` sets the base filter; `-v` flags, when given, replace its global
/// level while keeping per-target directives. Logs go to stderr so
/// stdout only carries the stylesheet.
pub fn init(verbosity: u8) {
    fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn build_filter(verbosity: u8) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbosity > 0 {
        filter.add_directive(level_for(verbosity).into())
    } else {
        filter
    }
}

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
