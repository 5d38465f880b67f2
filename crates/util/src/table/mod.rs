//! # Column-aligned Table Decoding
//!
//! Reconstructs rows and records from the fixed-width text a CLI table
//! renderer prints, so assertions can target fields instead of raw text.
//!
//! Decoding runs in three stages: [`detect_columns`] infers column widths from
//! a reference line, [`tokenize_row`] slices each line with those widths, and
//! [`decode_table`] ties them together with line normalization and optional
//! header zipping.

mod decode;
mod error;
mod layout;
mod tokenize;

pub use decode::{DecodeOptions, Record, Table, decode_table};
pub use error::TableError;
pub use layout::{BoundaryStrategy, ColumnLayout, detect_columns};
pub use tokenize::tokenize_row;

/// Parse a padding argument that must be exactly one character.
///
/// # Errors
/// Returns [`TableError::Configuration`] for an empty or multi-character value.
///
/// # Example
/// ```rust
/// use scaffold_util::table::parse_padding;
///
/// assert_eq!(parse_padding(" ").unwrap(), ' ');
/// assert!(parse_padding("").is_err());
/// assert!(parse_padding("..").is_err());
/// ```
pub fn parse_padding(value: &str) -> Result<char, TableError> {
    let mut characters = value.chars();
    match (characters.next(), characters.next()) {
        (Some(padding), None) => {
            layout::validate_padding(padding)?;
            Ok(padding)
        }
        _ => Err(TableError::Configuration(format!(
            "padding must be exactly one character, got {:?}",
            value
        ))),
    }
}
