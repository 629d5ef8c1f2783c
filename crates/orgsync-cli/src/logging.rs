//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr so JSON output on stdout stays machine-readable.
/// `RUST_LOG` selects the filter, defaulting to [`default_level`].
pub fn init(verbose: bool) -> Result<()> {

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing::debug!(verbose, "Logging initialized");
    Ok(())
}

/// Filter used when `RUST_LOG` is unset: "info", or "debug" when verbose.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info_unless_verbose() {
        assert_eq!(default_level(false), "info");
        assert_eq!(default_level(true), "debug");
        assert!(EnvFilter::try_new(default_level(false)).is_ok());
    }

    #[test]
    fn init_twice_reports_error() {
        // Only one global subscriber can be installed per process.
        let _ = init(false);
        assert!(init(false).is_err());
    }
}
