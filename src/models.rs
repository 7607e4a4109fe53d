//! Core data structures for SKU decoding.
//!
//! Defines the decoded glove attributes, the lookup-backed cuff style and
//! colour enums, and the fixed-width attribute record written to tables.

use crate::constants::{ATTRIBUTE_COLUMNS, LENGTH_UOM_INCH, UNKNOWN_LABEL};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One input table row: column name to cell value, in header order
pub type Row = IndexMap<String, String>;

/// Cuff style encoded between the length digits and the colour code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CuffStyle {
    Straight,
    Bell,
    Contour,
    ContourBell,
    Unknown,
}

impl CuffStyle {
    /// Look up a cuff code exactly; unmapped codes decode to `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "" => CuffStyle::Straight,
            "BC" => CuffStyle::Bell,
            "C" => CuffStyle::Contour,
            "CBC" => CuffStyle::ContourBell,
            _ => CuffStyle::Unknown,
        }
    }

    /// Human-readable label written to the "Cuff Style" column
    pub fn label(&self) -> &'static str {
        match self {
            CuffStyle::Straight => "Straight Cuff",
            CuffStyle::Bell => "Bell Cuff",
            CuffStyle::Contour => "Contour Cuff",
            CuffStyle::ContourBell => "Contour Bell Cuff",
            CuffStyle::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for CuffStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Glove colour code
///
/// `Blue` and `BlueOrange` are legacy lookup entries ("BL", "BLO"); the SKU
/// grammar has no colour alternative that produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    RedBlack,
    YellowBlack,
    BlackYellowBlack,
    Blue,
    BlueOrange,
    Unknown,
}

impl Color {
    /// Look up a colour code exactly; unmapped codes decode to `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "B" => Color::Black,
            "RB" => Color::RedBlack,
            "YB" => Color::YellowBlack,
            "BYB" => Color::BlackYellowBlack,
            "BL" => Color::Blue,
            "BLO" => Color::BlueOrange,
            _ => Color::Unknown,
        }
    }

    /// Human-readable label written to the "Color" column
    pub fn label(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::RedBlack => "Red/Black",
            Color::YellowBlack => "Yellow/Black",
            Color::BlackYellowBlack => "Black/Yellow/Black",
            Color::Blue => "Blue",
            Color::BlueOrange => "Blue/Orange",
            Color::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Attributes decoded from a well-formed glove SKU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GloveAttributes {
    /// Voltage class (0-9)
    pub class: u8,
    /// Glove length in inches
    pub length: u8,
    pub cuff_style: CuffStyle,
    pub color: Color,
    /// Size code, digits optionally with a half-size `H`
    pub size: String,
    pub rfid: bool,
    /// Trailing text after the RFID code
    pub extra: String,
}

impl GloveAttributes {
    /// Unit of measure for `length`
    pub fn length_uom(&self) -> &'static str {
        LENGTH_UOM_INCH
    }

    /// RFID flag as written to tables
    pub fn rfid_label(&self) -> &'static str {
        if self.rfid { "Yes" } else { "No" }
    }
}

/// Outcome of decoding one SKU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkuDecode {
    Parsed(GloveAttributes),
    Unparsed,
}

impl SkuDecode {
    pub fn is_parsed(&self) -> bool {
        matches!(self, SkuDecode::Parsed(_))
    }

    /// Borrow the attributes of a successful decode
    pub fn attributes(&self) -> Option<&GloveAttributes> {
        match self {
            SkuDecode::Parsed(attributes) => Some(attributes),
            SkuDecode::Unparsed => None,
        }
    }

    /// Flatten into the fixed-width tabular record
    pub fn into_record(self) -> AttributeRecord {
        match self {
            SkuDecode::Parsed(attributes) => AttributeRecord::from(attributes),
            SkuDecode::Unparsed => AttributeRecord::empty(),
        }
    }
}

/// A single table cell produced by decoding
///
/// Class and Length are integers on success. Every field of a failed decode
/// is `Text("")`, including Class and Length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Text(String),
}

impl AttributeValue {
    pub fn empty() -> Self {
        AttributeValue::Text(String::new())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(value) => Some(*value),
            AttributeValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Integer(_) => None,
            AttributeValue::Text(value) => Some(value),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(value) => write!(f, "{}", value),
            AttributeValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<u8> for AttributeValue {
    fn from(value: u8) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

/// Fixed-width attribute record in `ATTRIBUTE_COLUMNS` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    values: [AttributeValue; 8],
}

impl AttributeRecord {
    /// Sentinel record for an unparseable SKU
    pub fn empty() -> Self {
        Self {
            values: std::array::from_fn(|_| AttributeValue::empty()),
        }
    }

    /// True when every field is the empty string
    pub fn is_empty(&self) -> bool {
        self.values
            .iter()
            .all(|value| value.as_text().is_some_and(str::is_empty))
    }

    /// Look up a field by its column name
    pub fn get(&self, column: &str) -> Option<&AttributeValue> {
        ATTRIBUTE_COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|index| &self.values[index])
    }

    /// Iterate fields as (column name, value) in output order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> {
        ATTRIBUTE_COLUMNS.iter().copied().zip(self.values.iter())
    }
}

impl From<GloveAttributes> for AttributeRecord {
    fn from(attributes: GloveAttributes) -> Self {
        let length_uom = attributes.length_uom();
        let rfid = attributes.rfid_label();
        Self {
            values: [
                attributes.class.into(),
                attributes.length.into(),
                length_uom.into(),
                attributes.cuff_style.label().into(),
                attributes.color.label().into(),
                attributes.size.into(),
                rfid.into(),
                attributes.extra.into(),
            ],
        }
    }
}

impl fmt::Display for AttributeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        write!(f, "{{{}}}", fields.join(", "))
    }
}

/// Statistics for one processed SKU file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub rows_processed: usize,
    pub skus_parsed: usize,
    pub skus_unparsed: usize,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    /// Share of rows whose SKU decoded, as a percentage
    pub fn parse_rate(&self) -> f64 {
        if self.rows_processed == 0 {
            0.0
        } else {
            (self.skus_parsed as f64 / self.rows_processed as f64) * 100.0
        }
    }
}
