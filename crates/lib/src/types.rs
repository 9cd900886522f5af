//! # Wire Models
//!
//! Request and response bodies for every PUXA endpoint. Field names and
//! nesting are the public contract consumed by the browser extension and the
//! desktop shell, so they are spelled exactly as they appear on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The body accepted by the analyze and defluff-score endpoints.
///
/// `url` is kept as a raw JSON value so that whatever the client sent is
/// echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentPayload {
    #[serde(default = "empty_url")]
    pub url: Value,
}

fn empty_url() -> Value {
    Value::String(String::new())
}

impl Default for ContentPayload {
    fn default() -> Self {
        Self { url: empty_url() }
    }
}

impl ContentPayload {
    /// Creates a payload carrying a string URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Value::String(url.into()),
        }
    }
}

// --- Health & Root ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// The endpoint map advertised by the root endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointMap {
    pub health: String,
    pub analyze: String,
    pub fact_check: String,
    pub defluff_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: EndpointMap,
}

// --- Content Analysis ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub complexity: String,
    pub topics: Vec<String>,
    pub sentiment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisData {
    pub url: Value,
    pub analysis: Analysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub message: String,
    pub data: AnalysisData,
}

// --- Fact Check ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactCheckResponse {
    pub status: String,
    pub message: String,
    pub fact_checks: Vec<Value>,
}

// --- Defluff Score ---

/// The per-component breakdown behind a defluff score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefluffComponents {
    pub information_density: u32,
    pub ad_ratio: u32,
    pub clickbait: u32,
    pub quality: u32,
    pub value_ratio: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefluffResponse {
    pub status: String,
    pub url: Value,
    pub defluff_score: u32,
    pub components: DefluffComponents,
}
