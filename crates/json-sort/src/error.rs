use jws_json_value::ValueError;
use thiserror::Error;

/// Errors from the canonical encoding helpers.
///
/// Sorting itself cannot fail; these come from reading or writing text.
#[derive(Debug, Error)]
pub enum SortError {
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
