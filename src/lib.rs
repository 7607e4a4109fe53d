//! Electriflex Glove SKU Parser Library
//!
//! Decodes Electriflex insulating glove SKUs such as `NG216BCRB/10H` into
//! structured product attributes and applies the decoder to every row of a
//! CSV table.
//!
//! This library provides tools for:
//! - Decoding a single SKU into typed attributes or an empty sentinel record
//! - Merging decoded attributes into ordered table rows
//! - Reading and writing CSV tables while preserving column order
//! - Running the whole file pipeline with logging and run statistics
//!
//! ```rust
//! use electriflex_sku_parser::{attributes_from_sku, decode_sku, Color, CuffStyle};
//!
//! let decoded = decode_sku("NG218CBCRB/11/CLIF");
//! let attributes = decoded.attributes().unwrap();
//! assert_eq!(attributes.cuff_style, CuffStyle::ContourBell);
//! assert_eq!(attributes.color, Color::RedBlack);
//! assert_eq!(attributes.extra, "CLIF");
//!
//! assert!(attributes_from_sku("invalid").is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod processor;
pub mod sku;
pub mod table;
pub mod transform;

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use error::{Result, SkuError};
pub use models::{
    AttributeRecord, AttributeValue, Color, CuffStyle, GloveAttributes, ProcessingStats, Row,
    SkuDecode,
};
pub use processor::SkuFileProcessor;
pub use sku::{attributes_from_sku, decode_sku, is_valid_sku};
pub use transform::{OutputRow, TransformedTable, transform_rows};
