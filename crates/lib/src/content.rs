//! # Placeholder Content Operations
//!
//! One function per PUXA endpoint. Each returns a fixed-shape response and
//! echoes only the submitted URL where the contract asks for it. These are the
//! seams where the puxa.ai analysis service will be wired in.

use crate::{
    constants::*,
    types::{
        Analysis, AnalysisData, AnalyzeResponse, ContentPayload, DefluffComponents,
        DefluffResponse, EndpointMap, FactCheckResponse, HealthResponse, ServiceInfo,
    },
};
use tracing::info;

/// Reports service liveness and identity.
pub fn health() -> HealthResponse {
    HealthResponse {
        status: STATUS_OK.to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    }
}

/// Describes the service and the endpoints it exposes.
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        status: STATUS_RUNNING.to_string(),
        endpoints: EndpointMap {
            health: HEALTH_PATH.to_string(),
            analyze: ANALYZE_PATH.to_string(),
            fact_check: FACT_CHECK_PATH.to_string(),
            defluff_score: DEFLUFF_SCORE_PATH.to_string(),
        },
    }
}

/// Returns the placeholder analysis for the submitted URL.
pub fn analyze_content(payload: ContentPayload) -> AnalyzeResponse {
    info!("Received content analysis request for URL: {}", payload.url);
    AnalyzeResponse {
        status: STATUS_SUCCESS.to_string(),
        message: ANALYZE_MESSAGE.to_string(),
        data: AnalysisData {
            url: payload.url,
            analysis: Analysis {
                complexity: DEFAULT_COMPLEXITY.to_string(),
                topics: Vec::new(),
                sentiment: DEFAULT_SENTIMENT.to_string(),
            },
        },
    }
}

/// Returns an empty fact-check result. The request body is never inspected.
pub fn fact_check() -> FactCheckResponse {
    info!("Received fact-check request");
    FactCheckResponse {
        status: STATUS_SUCCESS.to_string(),
        message: FACT_CHECK_MESSAGE.to_string(),
        fact_checks: Vec::new(),
    }
}

/// The fixed component breakdown behind `DEFLUFF_SCORE`.
pub fn defluff_components() -> DefluffComponents {
    DefluffComponents {
        information_density: INFORMATION_DENSITY_SCORE,
        ad_ratio: AD_RATIO_SCORE,
        clickbait: CLICKBAIT_SCORE,
        quality: QUALITY_SCORE,
        value_ratio: VALUE_RATIO_SCORE,
    }
}

/// Returns the placeholder defluff score for the submitted URL.
pub fn defluff_score(payload: ContentPayload) -> DefluffResponse {
    info!("Received defluff score request for URL: {}", payload.url);
    DefluffResponse {
        status: STATUS_SUCCESS.to_string(),
        url: payload.url,
        defluff_score: DEFLUFF_SCORE,
        components: defluff_components(),
    }
}
