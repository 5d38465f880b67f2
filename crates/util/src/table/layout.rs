//! # Column Boundary Detection
//!
//! Infers fixed-width column offsets from the word starts of a reference line
//! in the captured output of a table renderer.

use crate::table::TableError;

/// How column boundaries are inferred from the captured lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryStrategy {
    /// Only the first non-empty line contributes boundaries.
    #[default]
    FirstLine,
    /// A word start of the first line survives only when no other line has a
    /// word running across it. Tolerates header names that contain padding.
    Intersection,
}

/// Ordered column offsets inferred from a reference line.
///
/// The last offset is synthetic and sits one past the longest line, so the
/// final column absorbs any trailing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    offsets: Vec<usize>,
}

impl ColumnLayout {
    fn from_offsets(mut offsets: Vec<usize>) -> Self {
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }

    /// Boundary offsets in characters, strictly increasing.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Column widths in characters; the deltas between successive offsets.
    pub fn widths(&self) -> Vec<usize> {
        self.offsets.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }

    /// Number of columns described by this layout.
    pub fn column_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }
}

/// Detect column boundaries in a captured table.
///
/// `content` must be the raw capture; lines are not padded beforehand. Empty
/// lines are ignored and the first remaining line is the reference line.
///
/// # Arguments
/// * `content` - The captured table text
/// * `padding` - The character used to fill space between cells
/// * `strategy` - Whether other lines may veto reference-line boundaries
///
/// # Errors
/// Returns [`TableError::Parse`] when there is no non-empty line or the
/// reference line holds nothing but padding, and
/// [`TableError::Configuration`] when `padding` is a line terminator.
///
/// # Example
/// ```rust
/// use scaffold_util::table::{BoundaryStrategy, detect_columns};
///
/// let content = "NAME      VERSION  GROUPS\nno-group  v1\n";
/// let layout = detect_columns(content, ' ', BoundaryStrategy::FirstLine).unwrap();
/// assert_eq!(layout.offsets(), &[0, 10, 19, 25]);
/// assert_eq!(layout.widths(), vec![10, 9, 6]);
/// ```
pub fn detect_columns(content: &str, padding: char, strategy: BoundaryStrategy) -> Result<ColumnLayout, TableError> {
    validate_padding(padding)?;

    let lines: Vec<Vec<char>> = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();
    let (reference, others) = lines.split_first().ok_or_else(TableError::no_reference_line)?;

    let mut offsets = word_starts(reference, padding);
    if offsets.is_empty() {
        return Err(TableError::Parse("reference line contains no columns".to_string()));
    }

    if strategy == BoundaryStrategy::Intersection {
        offsets.retain(|&offset| others.iter().all(|line| admits_boundary(line, offset, padding)));
    }

    let longest = lines.iter().map(Vec::len).max().unwrap_or_default();
    offsets.push(longest + 1);

    Ok(ColumnLayout::from_offsets(offsets))
}

pub(crate) fn validate_padding(padding: char) -> Result<(), TableError> {
    if matches!(padding, '\n' | '\r') {
        return Err(TableError::Configuration(format!(
            "padding must not be a line terminator, got {:?}",
            padding
        )));
    }
    Ok(())
}

/// Offsets of every character that opens a run of non-padding characters.
fn word_starts(line: &[char], padding: char) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;

    for (index, &character) in line.iter().enumerate() {
        let is_padding = character == padding;
        if !is_padding && !in_word {
            starts.push(index);
        }
        in_word = !is_padding;
    }

    starts
}

/// A line admits a boundary at `offset` unless a word runs across it.
fn admits_boundary(line: &[char], offset: usize, padding: char) -> bool {
    match line.get(offset) {
        None => true,
        Some(&character) if character == padding => true,
        Some(_) => offset == 0 || line.get(offset - 1) == Some(&padding),
    }
}
