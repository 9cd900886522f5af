//! # Content Route Handlers
//!
//! Handlers for the placeholder content endpoints. Bodies are read through
//! `LenientPayload`, so every request is answered with 200.

use crate::extract::LenientPayload;
use axum::Json;
use puxa::{content, AnalyzeResponse, DefluffResponse, FactCheckResponse};

/// `POST /api/content/analyze/`
pub async fn analyze_content_handler(
    LenientPayload(payload): LenientPayload,
) -> Json<AnalyzeResponse> {
    Json(content::analyze_content(payload))
}

/// `POST /api/content/fact-check/`. The body is accepted but not read.
pub async fn fact_check_handler() -> Json<FactCheckResponse> {
    Json(content::fact_check())
}

/// `POST /api/content/defluff-score/`
pub async fn defluff_score_handler(
    LenientPayload(payload): LenientPayload,
) -> Json<DefluffResponse> {
    Json(content::defluff_score(payload))
}
