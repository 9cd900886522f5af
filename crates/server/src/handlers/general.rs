//! # General Route Handlers
//!
//! The root metadata endpoint, the health check, and the JSON fallbacks for
//! requests that match no route.

use crate::errors::AppError;
use axum::{extract::OriginalUri, http::Method, Json};
use puxa::{content, HealthResponse, ServiceInfo};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Json<ServiceInfo> {
    Json(content::service_info())
}

/// The handler for the health check (`/api/health/`) endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(content::health())
}

// `OriginalUri` keeps the full path when called from inside a nested service.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
