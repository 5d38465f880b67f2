//! # Table Decoding
//!
//! Turns the captured stdout of a column-aligned table renderer back into
//! rows or header-keyed records.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::table::{BoundaryStrategy, TableError, detect_columns, layout::validate_padding, tokenize_row};

/// A decoded row keyed by header name, in header order.
pub type Record = IndexMap<String, String>;

/// Options controlling a single [`decode_table`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Character filling the space between and after cells.
    pub padding: char,
    /// Whether the first non-empty line holds column names.
    pub has_header: bool,
    /// Whether rows are zipped with the header into records.
    pub as_records: bool,
    /// How column boundaries are inferred.
    pub strategy: BoundaryStrategy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            padding: ' ',
            has_header: true,
            as_records: false,
            strategy: BoundaryStrategy::FirstLine,
        }
    }
}

impl DecodeOptions {
    /// Options producing header-keyed records.
    pub fn records() -> Self {
        Self::default().with_records(true)
    }

    pub fn with_padding(mut self, padding: char) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_records(mut self, as_records: bool) -> Self {
        self.as_records = as_records;
        self
    }

    pub fn with_strategy(mut self, strategy: BoundaryStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Result of decoding one captured table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Table {
    /// Positional cells per data line.
    Rows(Vec<Vec<String>>),
    /// Header-keyed cells per data line.
    Records(Vec<Record>),
}

impl Table {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        match self {
            Table::Rows(rows) => rows.len(),
            Table::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positional rows, when the table was decoded without records.
    pub fn rows(&self) -> Option<&[Vec<String>]> {
        match self {
            Table::Rows(rows) => Some(rows),
            Table::Records(_) => None,
        }
    }

    /// Records, when the table was decoded with records.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Table::Records(records) => Some(records),
            Table::Rows(_) => None,
        }
    }

    /// Consume the table, returning its records; `None` for row tables.
    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            Table::Records(records) => Some(records),
            Table::Rows(_) => None,
        }
    }
}

/// Decode the captured output of a column-aligned table renderer.
///
/// Empty lines are dropped and every remaining line is right-padded with
/// `options.padding` to the longest line, so data rows narrower than the
/// header decode to empty trailing cells. Column boundaries are detected on
/// the raw `content`, not on the padded lines.
///
/// # Arguments
/// * `content` - The captured table text
/// * `options` - Padding, header, record and boundary settings
///
/// # Errors
/// * [`TableError::Configuration`] when records are requested without a
///   header, or the padding is a line terminator. Checked before the content.
/// * [`TableError::Parse`] when `content` has no non-empty line.
///
/// # Example
/// ```rust
/// use scaffold_util::table::{DecodeOptions, decode_table};
///
/// let content = "NAME      VERSION  GROUPS\nno-group  v1\nfoo       v1       foo\n";
/// let table = decode_table(content, &DecodeOptions::records()).unwrap();
/// let records = table.records().unwrap();
/// assert_eq!(records[0]["GROUPS"], "");
/// assert_eq!(records[1]["GROUPS"], "foo");
/// ```
pub fn decode_table(content: &str, options: &DecodeOptions) -> Result<Table, TableError> {
    validate_padding(options.padding)?;
    if options.as_records && !options.has_header {
        return Err(TableError::records_without_header());
    }

    let lines: Vec<&str> = content.lines().filter(|line| !line.is_empty()).collect();
    if lines.is_empty() {
        return Err(TableError::Parse("no non-empty lines to decode".to_string()));
    }
    let normalized = pad_lines(&lines, options.padding);

    let widths = detect_columns(content, options.padding, options.strategy)?.widths();

    let (header, data_lines) = if options.has_header {
        let (first, rest) = normalized.split_first().ok_or_else(TableError::no_reference_line)?;
        (Some(tokenize_row(first, &widths)), rest)
    } else {
        (None, normalized.as_slice())
    };

    let rows = data_lines.iter().map(|line| tokenize_row(line, &widths));
    let table = match header {
        Some(names) if options.as_records => Table::Records(rows.map(|cells| zip_record(&names, cells)).collect()),
        _ => Table::Rows(rows.collect()),
    };

    debug!(columns = widths.len(), rows = table.len(), "decoded table");
    Ok(table)
}

/// Right-pad each line with `padding` up to the longest line.
fn pad_lines(lines: &[&str], padding: char) -> Vec<String> {
    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or_default();

    lines
        .iter()
        .map(|line| {
            let mut padded = line.to_string();
            padded.extend(std::iter::repeat_n(padding, longest - line.chars().count()));
            padded
        })
        .collect()
}

/// Zip cells with header names; a repeated name keeps its last value.
fn zip_record(names: &[String], cells: Vec<String>) -> Record {
    let mut record = Record::with_capacity(names.len());
    for (name, cell) in names.iter().zip(cells) {
        record.insert(name.clone(), cell);
    }
    record
}
