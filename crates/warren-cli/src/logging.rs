//! Logging setup for the CLI.
//!
//! Structured logging via `tracing`. The default filter level comes from
//! the resolved verbosity; `RUST_LOG` overrides the filter entirely. Logs
//! go to stderr so the generated document echoed on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::LogFormat;
use crate::error::{CliError, Result};
use crate::settings::Settings;

/// Install the global tracing subscriber for this invocation.
pub fn init(settings: &Settings) -> Result<()> {
    let default_level = match settings.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;

    let result = match settings.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| CliError::Logging {
        message: e.to_string(),
    })
}
