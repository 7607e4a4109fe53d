//! Error handling for SKU table processing.
//!
//! An unparseable SKU is not an error: the decoder degrades it to an empty
//! attribute record. Everything here is fatal for the batch and indicates
//! that the input table or the paths given are structurally wrong.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Input file is a directory: {path}")]
    InputIsDirectory { path: PathBuf },

    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },

    #[error("SKU column '{column}' not found in header (available: {available})")]
    SkuColumnNotFound { column: String, available: String },

    #[error("Column '{column}' not found in row {row}")]
    MissingColumn { column: String, row: usize },

    #[error(
        "Row {row} has columns that differ from the header: expected {expected} columns, found {found}"
    )]
    InconsistentColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SkuError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing column error for the given 1-based data row
    pub fn missing_column(column: impl Into<String>, row: usize) -> Self {
        Self::MissingColumn {
            column: column.into(),
            row,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkuError>;
