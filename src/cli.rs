//! Command-line interface components.

use crate::config::ProcessorConfig;
use crate::constants::{DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_SKU_COLUMN};
use crate::logging::setup_logging;
use crate::models::ProcessingStats;
use crate::processor::SkuFileProcessor;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Parse Electriflex glove SKUs into product attributes
///
/// Reads a UTF-8 CSV file with a column of SKUs and writes a copy with the
/// attributes decoded from each SKU appended as columns: Class, Length,
/// Length UOM, Cuff Style, Color, Size, RFID and EXTRA. Only Electriflex glove
/// SKUs (e.g. NG216YB/9, NG216BCRB/10H, NG418CRB/12/CLIF, NG216BCBYB/10/RF)
/// are understood; any other SKU gets empty attribute columns.
#[derive(Parser, Debug)]
#[command(name = "parse_electriflex_gloves_skus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to CSV file containing Electriflex glove SKUs
    #[arg(value_name = "INPUTFILE")]
    pub input_file: PathBuf,

    /// Name of SKU column in the CSV file
    #[arg(
        short = 's',
        long = "sku-column-name",
        visible_alias = "sku-column",
        value_name = "NAME",
        default_value = DEFAULT_SKU_COLUMN
    )]
    pub sku_column_name: String,

    /// Name of output file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Log file appended to on every run
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Do not write a log file
    #[arg(long, conflicts_with = "log_file")]
    pub no_log_file: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }

    /// Log file to write, if any
    pub fn log_file(&self) -> Option<&Path> {
        if self.no_log_file {
            None
        } else {
            Some(self.log_file.as_path())
        }
    }

    /// Processor configuration from the command line
    pub fn to_config(&self) -> ProcessorConfig {
        ProcessorConfig::default()
            .with_sku_column(self.sku_column_name.clone())
            .with_progress(self.show_progress())
            .with_log_file(self.log_file().map(Path::to_path_buf))
    }
}

/// Run the parser for the given arguments
pub fn run(args: &Args) -> Result<ProcessingStats> {
    let config = args.to_config();
    setup_logging(args.get_log_level(), args.quiet, config.log_file.as_deref())
        .context("Failed to set up logging")?;

    let processor = SkuFileProcessor::new(args.input_file.clone(), args.output_file.clone())?
        .with_config(config);

    info!("Starting...");
    let stats = processor.process().with_context(|| {
        format!(
            "Failed to parse SKUs from {}",
            processor.input_path().display()
        )
    })?;
    info!("Finished.");

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Print a short human-readable summary of the run
pub fn print_summary(stats: &ProcessingStats) {
    println!(
        "{} {} rows from {}",
        "Parsed".bright_green().bold(),
        stats.rows_processed.to_string().bright_white().bold(),
        stats.input_path.display()
    );
    println!(
        "  {} {} ({:.1}%)",
        "Decoded SKUs:".bright_cyan(),
        stats.skus_parsed,
        stats.parse_rate()
    );
    if stats.skus_unparsed > 0 {
        println!(
            "  {} {}",
            "Unparseable SKUs:".bright_yellow(),
            stats.skus_unparsed
        );
    }
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        stats.output_path.display()
    );
    println!(
        "  {} {}ms",
        "Time:".bright_cyan(),
        stats.processing_time_ms
    );
}
