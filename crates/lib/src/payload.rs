//! # Lenient Payload Decoding
//!
//! Request bodies sent to the content endpoints are decoded without ever
//! rejecting the request. Empty bodies, non-object JSON and missing fields all
//! resolve to the default payload. Malformed bodies are reported as a
//! `PayloadError` so that callers can log them, and `decode_lenient` swallows
//! that error into the default payload.

use crate::{errors::PayloadError, types::ContentPayload};
use serde_json::Value;
use tracing::debug;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The encoding of an incoming request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyFormat {
    #[default]
    Json,
    Form,
}

impl BodyFormat {
    /// Picks a body format from a `Content-Type` header value.
    ///
    /// Anything that is not form-encoded, including a missing header, is
    /// treated as JSON.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let is_form = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
            .unwrap_or(false);
        if is_form {
            BodyFormat::Form
        } else {
            BodyFormat::Json
        }
    }
}

/// Decodes a request body into a `ContentPayload`.
pub fn decode(body: &[u8], format: BodyFormat) -> Result<ContentPayload, PayloadError> {
    match format {
        BodyFormat::Json => decode_json(body),
        BodyFormat::Form => decode_form(body),
    }
}

/// Decodes a request body, falling back to the default payload on any error.
pub fn decode_lenient(body: &[u8], format: BodyFormat) -> ContentPayload {
    decode(body, format).unwrap_or_else(|e| {
        debug!("Ignoring undecodable {format:?} body ({} bytes): {e}", body.len());
        ContentPayload::default()
    })
}

fn decode_json(body: &[u8]) -> Result<ContentPayload, PayloadError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContentPayload::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        _ => Ok(ContentPayload::default()),
    }
}

fn decode_form(body: &[u8]) -> Result<ContentPayload, PayloadError> {
    std::str::from_utf8(body).map_err(|_| PayloadError::MalformedForm)?;

    // A repeated `url` field resolves to its last value.
    Ok(url::form_urlencoded::parse(body)
        .filter(|(key, _)| key == "url")
        .last()
        .map(|(_, value)| ContentPayload::with_url(value.into_owned()))
        .unwrap_or_default())
}
