use thiserror::Error;

/// Errors raised while decoding a request body.
///
/// The server never turns these into failed responses. They exist so callers
/// can log what was wrong with a body before falling back to the default
/// payload.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Request body is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Request body is not valid UTF-8 form data")]
    MalformedForm,
}
