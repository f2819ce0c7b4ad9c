//! Structured logging setup for ranq
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! The `RANQ_LOG` environment variable overrides CLI-derived levels.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber from CLI flags.
///
/// `verbose` selects debug-level logging; an explicit `log_level` wins over
/// both. `log_json` switches to JSON-formatted log lines.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "debug",
        (false, None) => "warn",
        (_, Some(level)) => level,
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("RANQ_LOG"))
        .unwrap_or_else(|_| {
            if level.contains('=') {
                EnvFilter::new(level)
            } else {
                EnvFilter::new(format!("ranq={level},ranq_core={level}"))
            }
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
