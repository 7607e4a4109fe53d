//! Structured logging setup.
//!
//! Console output goes to stderr. When a log file is configured every event
//! is also appended to it, without ANSI colours and with local timestamps.
//! `RUST_LOG` overrides the level chosen on the command line.

use crate::error::{Result, SkuError};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Timestamp format used in the log file
const LOG_FILE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Build the default filter for this crate at the given level
pub fn default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            log_level
        ))
    })
}

/// Set up console logging and, optionally, an appending log file
pub fn setup_logging(log_level: &str, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = default_filter(log_level);

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(ChronoLocal::new(LOG_FILE_TIME_FORMAT.to_string()))
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    let result = if quiet {
        // Minimal logging for quiet mode
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| SkuError::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    if let Some(path) = log_file {
        debug!("Writing log file to {}", path.display());
    }
    Ok(())
}
