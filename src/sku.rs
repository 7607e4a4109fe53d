//! Electriflex glove SKU decoder.
//!
//! A glove SKU looks like `NG218CBCRB/11/RF/CLIF`:
//!
//! ```text
//! NG  2  18  CBC  RB  /  11  /  RF  /CLIF
//! |   |  |   |    |   |  |   |  |   |
//! |   |  |   |    |   |  |   |  |   extra (rest of the string)
//! |   |  |   |    |   |  |   |  RFID code, optional
//! |   |  |   |    |   |  |   optional separator
//! |   |  |   |    |   |  size, digits and H
//! |   |  |   |    |   "/" or "-"
//! |   |  |   |    colour: B, RB, YB, BYB
//! |   |  |   cuff: none, BC, C, CBC
//! |   |  length in inches, 1-2 digits
//! |   voltage class, 1 digit
//! product line prefix
//! ```
//!
//! Only the start of the string is anchored. Anything after the RFID code is
//! kept verbatim as `extra`.

use crate::constants::{RFID_CODE, SKU_PATTERN};
use crate::models::{AttributeRecord, Color, CuffStyle, GloveAttributes, SkuDecode};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{trace, warn};

static SKU_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SKU_PATTERN).expect("Invalid SKU regex"));

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("Invalid digit regex"));

/// Decode a SKU into typed glove attributes.
///
/// Never fails: input that does not match the grammar yields
/// [`SkuDecode::Unparsed`] and a warning is logged naming the input.
pub fn decode_sku(sku: &str) -> SkuDecode {
    match SKU_REGEX.captures(sku).and_then(|caps| attributes_from_captures(&caps)) {
        Some(attributes) => {
            trace!("Decoded SKU {}: {:?}", sku, attributes);
            SkuDecode::Parsed(attributes)
        }
        None => {
            warn!("Invalid SKU: {}", sku);
            SkuDecode::Unparsed
        }
    }
}

/// Decode a SKU straight into its tabular attribute record.
///
/// Unparseable input produces the all-empty sentinel record.
pub fn attributes_from_sku(sku: &str) -> AttributeRecord {
    decode_sku(sku).into_record()
}

/// Check whether a SKU matches the grammar without logging
pub fn is_valid_sku(sku: &str) -> bool {
    SKU_REGEX.is_match(sku)
}

fn attributes_from_captures(caps: &Captures<'_>) -> Option<GloveAttributes> {
    let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    Some(GloveAttributes {
        class: parse_number(group("class"))?,
        length: parse_number(group("length"))?,
        cuff_style: CuffStyle::from_code(group("cuff")),
        color: Color::from_code(group("color")),
        size: group("size").to_string(),
        rfid: group("rfid") == RFID_CODE,
        extra: group("extra").to_string(),
    })
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of any Unicode decimal digit.
///
/// Decimal digits are encoded in contiguous runs of ten starting at zero, so
/// the value is the offset from the start of the run.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(previous) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(previous) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Parse a short run of decimal digits, ASCII or not
fn parse_number(digits: &str) -> Option<u8> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u8, |acc, c| {
        let digit = u8::try_from(digit_value(c)?).ok()?;
        acc.checked_mul(10)?.checked_add(digit)
    })
}
