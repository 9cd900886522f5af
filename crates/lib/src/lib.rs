//! # PUXA Content API
//!
//! This crate holds the transport-independent half of the PUXA Browser API:
//! the wire models, the lenient request-body decoder, and the placeholder
//! content operations (analysis, fact-check, defluff scoring) that the server
//! exposes over HTTP.

pub mod constants;
pub mod content;
pub mod errors;
pub mod payload;
pub mod types;

pub use errors::PayloadError;
pub use payload::{decode, decode_lenient, BodyFormat};
pub use types::{
    AnalyzeResponse, ContentPayload, DefluffResponse, FactCheckResponse, HealthResponse,
    ServiceInfo,
};
