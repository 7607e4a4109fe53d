//! Application constants for the Electriflex SKU parser
//!
//! Column names, lookup codes and default values used throughout the parser.

// =============================================================================
// Attribute Columns
// =============================================================================

/// Attribute columns appended to every output row, in output order
pub const ATTRIBUTE_COLUMNS: [&str; 8] = [
    COLUMN_CLASS,
    COLUMN_LENGTH,
    COLUMN_LENGTH_UOM,
    COLUMN_CUFF_STYLE,
    COLUMN_COLOR,
    COLUMN_SIZE,
    COLUMN_RFID,
    COLUMN_EXTRA,
];

pub const COLUMN_CLASS: &str = "Class";
pub const COLUMN_LENGTH: &str = "Length";
pub const COLUMN_LENGTH_UOM: &str = "Length UOM";
pub const COLUMN_CUFF_STYLE: &str = "Cuff Style";
pub const COLUMN_COLOR: &str = "Color";
pub const COLUMN_SIZE: &str = "Size";
pub const COLUMN_RFID: &str = "RFID";
pub const COLUMN_EXTRA: &str = "EXTRA";

/// Unit of measure reported for every successfully parsed length
pub const LENGTH_UOM_INCH: &str = "inch";

/// Label used when a decoded code has no entry in its lookup table
pub const UNKNOWN_LABEL: &str = "Unknown";

// =============================================================================
// SKU Grammar
// =============================================================================

/// Product line prefix every Electriflex glove SKU starts with
pub const SKU_PREFIX: &str = "NG";

/// SKU grammar, anchored at the start of the input only.
///
/// Cuff and colour alternatives are listed longest first. The cuff codes are
/// mutually exclusive once a colour token and separator must follow, so the
/// leftmost-first match is the only match. Class and length accept any
/// Unicode decimal digit; size is ASCII digits and `H`.
pub const SKU_PATTERN: &str = r"^NG(?P<class>\d)(?P<length>\d{1,2})(?P<cuff>CBC|BC|C)?(?P<color>BYB|RB|YB|B)[/-](?P<size>[0-9H]+)/?(?P<rfid>RF)?(?P<extra>.*)";

/// RFID code marking a tagged glove
pub const RFID_CODE: &str = "RF";

// =============================================================================
// Defaults
// =============================================================================

/// Default name of the input column holding SKUs
pub const DEFAULT_SKU_COLUMN: &str = "SKU";

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Default log file, written to the working directory
pub const DEFAULT_LOG_FILE: &str = "electriflex_gloves.log";
