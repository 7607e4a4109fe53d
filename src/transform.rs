//! Batch transformer: decode the SKU column of every row.
//!
//! Rows are consumed in order and never mutated; each one is merged with its
//! decoded attribute record into a new output row. The output header is fixed
//! by the first row and every later row must carry the same columns.

use crate::constants::ATTRIBUTE_COLUMNS;
use crate::error::{Result, SkuError};
use crate::models::{AttributeValue, Row};
use crate::sku::decode_sku;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Output row: input columns first, then the decoded attribute columns
pub type OutputRow = IndexMap<String, AttributeValue>;

/// Counters collected while transforming a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    pub rows: usize,
    pub parsed: usize,
    pub unparsed: usize,
}

/// Result of transforming a batch of rows
#[derive(Debug, Clone, Default)]
pub struct TransformedTable {
    /// First row's columns followed by `ATTRIBUTE_COLUMNS`.
    ///
    /// An input column that shares a name with an attribute appears twice;
    /// both positions carry the decoded value. Rows are keyed by name, so a
    /// caller holding a header with repeated names (a CSV header) should
    /// replace this with [`output_header`] over that header.
    pub header: Vec<String>,
    pub rows: Vec<OutputRow>,
    pub stats: TransformStats,
}

/// Build the output header from the input columns
pub fn output_header<'a>(input_columns: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    input_columns
        .into_iter()
        .chain(ATTRIBUTE_COLUMNS)
        .map(str::to_string)
        .collect()
}

/// Merge a row with the attributes decoded from its SKU column.
///
/// Attribute values overwrite input cells with the same column name; the
/// overwritten column keeps its original position.
pub fn merge_row(row: Row, sku_column: &str, row_number: usize) -> Result<(OutputRow, bool)> {
    let sku = row
        .get(sku_column)
        .ok_or_else(|| SkuError::missing_column(sku_column, row_number))?;
    let decoded = decode_sku(sku);
    let parsed = decoded.is_parsed();

    let mut output: OutputRow = row
        .into_iter()
        .map(|(column, value)| (column, AttributeValue::Text(value)))
        .collect();
    for (column, value) in decoded.into_record().iter() {
        output.insert(column.to_string(), value.clone());
    }

    Ok((output, parsed))
}

/// Decode `sku_column` for every row, preserving row order.
///
/// Fails on the first row that lacks `sku_column` or whose columns differ
/// from the first row's. Unparseable SKUs are not errors.
pub fn transform_rows<I>(rows: I, sku_column: &str) -> Result<TransformedTable>
where
    I: IntoIterator<Item = Row>,
{
    let mut table = TransformedTable::default();
    let mut expected_columns: Option<IndexSet<String>> = None;

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;

        let expected = expected_columns.get_or_insert_with(|| {
            table.header = output_header(row.keys().map(String::as_str));
            row.keys().cloned().collect()
        });
        let same_columns =
            row.len() == expected.len() && row.keys().all(|key| expected.contains(key));
        if !same_columns {
            return Err(SkuError::InconsistentColumns {
                row: row_number,
                expected: expected.len(),
                found: row.len(),
            });
        }

        let (output, parsed) = merge_row(row, sku_column, row_number)?;
        if parsed {
            table.stats.parsed += 1;
        } else {
            table.stats.unparsed += 1;
        }
        table.stats.rows += 1;
        table.rows.push(output);
    }

    debug!(
        "Transformed {} rows ({} parsed, {} unparsed)",
        table.stats.rows, table.stats.parsed, table.stats.unparsed
    );

    Ok(table)
}
