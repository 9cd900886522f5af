//! # Lenient Request Extraction
//!
//! An Axum extractor that never rejects a request because of its body. It
//! reads the raw bytes (bounded by `DefaultBodyLimit`) and hands them to
//! `puxa::decode_lenient`, which falls back to the default payload when the
//! body is empty, malformed, or unreadable.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use puxa::{decode_lenient, BodyFormat, ContentPayload};
use std::convert::Infallible;
use tracing::debug;

/// A `ContentPayload` decoded without the possibility of rejection.
#[derive(Debug, Clone)]
pub struct LenientPayload(pub ContentPayload);

impl<S> FromRequest<S> for LenientPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = BodyFormat::from_content_type(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let payload = match Bytes::from_request(req, state).await {
            Ok(body) => decode_lenient(&body, format),
            Err(rejection) => {
                debug!("Could not read request body, using defaults: {rejection}");
                ContentPayload::default()
            }
        };

        Ok(Self(payload))
    }
}
