//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, writing compact lines to stderr.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` decides, falling back to
/// [`DEFAULT_FILTER`].
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = filter(verbose)?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn filter(verbose: bool) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    if verbose {
        return EnvFilter::try_new("debug");
    }
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
}
