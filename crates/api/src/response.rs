//! Response handling shared by every resource call.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::ApiError;

/// Status and decoded body of an API call.
///
/// `body` is `None` when the server answered with an error status and the
/// call was made with `fail_on_error = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Return the body, failing when the call produced none.
    pub fn into_body(self) -> Result<T, ApiError> {
        let status = self.status;
        self.body.ok_or(ApiError::MissingBody { status })
    }
}

/// Return a user-friendly hint for common HTTP error statuses.
///
/// # Example
/// ```rust
/// use scaffold_api::status_error_message;
///
/// assert!(status_error_message(401).unwrap().contains("SCAFFOLD_AUTH"));
/// assert!(status_error_message(403).unwrap().contains("groups"));
/// assert!(status_error_message(404).is_none());
/// ```
pub fn status_error_message(status_code: u16) -> Option<String> {
    match status_code {
        401 => Some("Unauthorized (401). Hint: set SCAFFOLD_AUTH to a valid API token".into()),
        403 => Some("Forbidden (403). Hint: check the user's groups and roles for this workflow".into()),
        _ => None,
    }
}

/// Decode a scaffold API response body as `T`.
///
/// # Arguments
/// * `text` - The response body as received
/// * `status` - The response status, when known, for the error message
///
/// # Errors
/// [`JsonParseError`] when `text` is not valid JSON for `T`; the error carries
/// the status and a single-line preview of the offending body.
pub fn parse_response_json_strict<T: DeserializeOwned>(text: &str, status: Option<StatusCode>) -> Result<T, JsonParseError> {
    serde_json::from_str::<T>(text).map_err(|source| JsonParseError {
        status,
        source,
        body_preview: truncate_response_preview(text, PREVIEW_CHARS),
    })
}

/// Characters of a response body kept in error messages.
pub(crate) const PREVIEW_CHARS: usize = 200;

/// Single-line preview of a response body for error messages.
///
/// Whitespace runs collapse to one space. At most `limit` characters are
/// kept and a cut is marked with `...`; a blank body reads `<empty>`.
pub(crate) fn truncate_response_preview(text: &str, limit: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return "<empty>".to_string();
    }
    match collapsed.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &collapsed[..cut]),
        None => collapsed,
    }
}

/// A scaffold API body that did not decode into the expected resource.
#[derive(Debug, Error)]
#[error("response ({}) is not the expected JSON: {source}; body: {body_preview}", status_label(.status))]
pub struct JsonParseError {
    status: Option<StatusCode>,
    #[source]
    source: serde_json::Error,
    body_preview: String,
}

impl JsonParseError {
    /// Status of the response that failed to decode, when it was known.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn body_preview(&self) -> &str {
        &self.body_preview
    }
}

fn status_label(status: &Option<StatusCode>) -> String {
    status.map_or_else(|| "unknown status".to_string(), |code| format!("status {}", code.as_u16()))
}
