//! Configuration for SKU file processing.
//!
//! Provides the processor settings with defaults matching the command-line
//! tool, builder-style overrides, and validation.

use crate::constants::{DEFAULT_LOG_FILE, DEFAULT_SKU_COLUMN};
use crate::error::{Result, SkuError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for a single SKU file run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Name of the input column holding SKUs
    pub sku_column: String,

    /// Show a progress bar while rows are decoded
    pub show_progress: bool,

    /// Log file written alongside console output (None disables it)
    pub log_file: Option<PathBuf>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            sku_column: DEFAULT_SKU_COLUMN.to_string(),
            show_progress: true,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl ProcessorConfig {
    /// Use a different SKU column
    pub fn with_sku_column(mut self, sku_column: impl Into<String>) -> Self {
        self.sku_column = sku_column.into();
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Set the log file path (None disables file logging)
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.sku_column.is_empty() {
            return Err(SkuError::configuration("SKU column name must not be empty"));
        }

        if let Some(log_file) = &self.log_file {
            if log_file.as_os_str().is_empty() {
                return Err(SkuError::configuration("Log file path must not be empty"));
            }
        }

        Ok(())
    }
}
