//! # Shared Constants
//!
//! This module provides a centralized location for the literal values that make
//! up the PUXA wire contract: service identity, placeholder messages, the fixed
//! defluff breakdown, and the API path table shared by the router and the root
//! metadata endpoint.

/// The service name reported by the health and root endpoints.
pub const SERVICE_NAME: &str = "PUXA Browser API";

/// The API version reported by the health and root endpoints.
pub const SERVICE_VERSION: &str = "1.0.0";

pub const STATUS_OK: &str = "ok";
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_RUNNING: &str = "running";

pub const ANALYZE_MESSAGE: &str = "Content analysis endpoint (placeholder)";
pub const FACT_CHECK_MESSAGE: &str = "Fact-check endpoint (placeholder)";

// Placeholder analysis values.
pub const DEFAULT_COMPLEXITY: &str = "medium";
pub const DEFAULT_SENTIMENT: &str = "neutral";

/// The hard-coded defluff score returned until real scoring exists.
pub const DEFLUFF_SCORE: u32 = 75;
pub const INFORMATION_DENSITY_SCORE: u32 = 80;
pub const AD_RATIO_SCORE: u32 = 70;
pub const CLICKBAIT_SCORE: u32 = 80;
pub const QUALITY_SCORE: u32 = 75;
pub const VALUE_RATIO_SCORE: u32 = 70;

// --- API Paths ---

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/api/health/";
pub const ANALYZE_PATH: &str = "/api/content/analyze/";
pub const FACT_CHECK_PATH: &str = "/api/content/fact-check/";
pub const DEFLUFF_SCORE_PATH: &str = "/api/content/defluff-score/";
