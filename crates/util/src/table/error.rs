use thiserror::Error;

/// Error surfaced when a captured table cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The input has no usable lines or cannot be sliced into columns.
    #[error("parse error: {0}")]
    Parse(String),
    /// The caller asked for an option combination that cannot be honoured.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TableError {
    pub(crate) fn no_reference_line() -> Self {
        Self::Parse("no reference line available".to_string())
    }

    pub(crate) fn records_without_header() -> Self {
        Self::Configuration("producing records requires a header".to_string())
    }

    /// Returns `true` for [`TableError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` for [`TableError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
