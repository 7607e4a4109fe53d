//! SKU file processing pipeline.
//!
//! Validates the input and output paths, reads the CSV table, decodes the
//! SKU column of every row and writes the augmented table.

use crate::config::ProcessorConfig;
use crate::error::{Result, SkuError};
use crate::models::ProcessingStats;
use crate::table::{read_table, write_table};
use crate::transform::{output_header, transform_rows};

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

#[cfg(test)]
mod tests;

/// Processor for one SKU file
#[derive(Debug)]
pub struct SkuFileProcessor {
    input_path: PathBuf,
    output_path: PathBuf,
    config: ProcessorConfig,
}

impl SkuFileProcessor {
    /// Create a processor, checking that the input file and output directory exist
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Result<Self> {
        if !input_path.exists() {
            error!("Input file not found: {}", input_path.display());
            return Err(SkuError::InputNotFound { path: input_path });
        }
        if input_path.is_dir() {
            error!("Input file is a directory: {}", input_path.display());
            return Err(SkuError::InputIsDirectory { path: input_path });
        }

        let output_dir = output_directory(&output_path);
        if !output_dir.exists() {
            error!("Output directory not found: {}", output_dir.display());
            return Err(SkuError::OutputDirectoryNotFound { path: output_dir });
        }

        Ok(Self {
            input_path,
            output_path,
            config: ProcessorConfig::default(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Decode every SKU in the input file and write the output file
    pub fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        info!("Parsing SKUs from file {}", self.input_path.display());
        let table = read_table(&self.input_path)?;

        let sku_column = self.config.sku_column.as_str();
        if !table.has_column(sku_column) {
            return Err(SkuError::SkuColumnNotFound {
                column: sku_column.to_string(),
                available: table.header.join(", "),
            });
        }

        let progress_bar = self.create_progress_bar(table.rows.len() as u64);
        let input_header = table.header;
        let rows = table.rows.into_iter().inspect(|_| progress_bar.inc(1));
        let transformed = transform_rows(rows, sku_column);
        progress_bar.finish_and_clear();
        let mut transformed = transformed?;

        // Every input column is written, repeated names included, even
        // when there are no data rows
        transformed.header = output_header(input_header.iter().map(String::as_str));

        write_table(&self.output_path, &transformed.header, &transformed.rows)?;

        let stats = ProcessingStats {
            rows_processed: transformed.stats.rows,
            skus_parsed: transformed.stats.parsed,
            skus_unparsed: transformed.stats.unparsed,
            input_path: self.input_path.clone(),
            output_path: self.output_path.clone(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        debug!(
            "Processed {} rows in {}ms",
            stats.rows_processed, stats.processing_time_ms
        );

        Ok(stats)
    }

    fn create_progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Decoding SKUs");
        pb
    }
}

/// Directory an output file will be created in
fn output_directory(output_path: &Path) -> PathBuf {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
