use thiserror::Error;

/// Errors raised when reading JSON into the value model.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}
