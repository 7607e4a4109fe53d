//! CSV table reading and writing.
//!
//! Input files are UTF-8 CSV with a header row (comma separated, `"` quoting).
//! Every data row is read into an ordered [`Row`] keyed by header name, and
//! output rows are written back projected onto the output header.

use crate::error::{Result, SkuError};
use crate::models::Row;
use crate::transform::OutputRow;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// A CSV file read into memory
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Check whether the header contains a column
    pub fn has_column(&self, column: &str) -> bool {
        self.header.iter().any(|name| name == column)
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Read a CSV table from any reader
pub fn read_table_from<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let header: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if index == 0 {
                normalize_header(name)
            } else {
                name.to_string()
            }
        })
        .collect();

    for (index, name) in header.iter().enumerate() {
        if header[..index].contains(name) {
            warn!(
                "Column {:?} appears more than once; the last value in each row is used",
                name
            );
        }
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Row = header
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    Ok(Table { header, rows })
}

/// Read a CSV table from a file
pub fn read_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).map_err(SkuError::Io)?;
    let table = read_table_from(file)?;
    debug!(
        "Read {} rows with {} columns from {}",
        table.rows.len(),
        table.header.len(),
        path.display()
    );
    Ok(table)
}

/// Write output rows to any writer, header first.
///
/// Each row is projected onto `header`; a column missing from a row is
/// written empty. Lines end with `\r\n`.
pub fn write_table_to<W: Write>(writer: W, header: &[String], rows: &[OutputRow]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(header)?;
    for row in rows {
        csv_writer.write_record(project_row(row, header))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write output rows to a file, replacing it if it exists
pub fn write_table(path: &Path, header: &[String], rows: &[OutputRow]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(SkuError::Io)?;
    write_table_to(file, header, rows)?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Render a row's cells in header order
pub fn project_row(row: &OutputRow, header: &[String]) -> Vec<String> {
    header
        .iter()
        .map(|column| {
            row.get(column)
                .map(ToString::to_string)
                .unwrap_or_default()
        })
        .collect()
}
