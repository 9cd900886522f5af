use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

/// A custom error type for the server application.
///
/// The placeholder endpoints never fail, so these variants only describe
/// requests the router could not dispatch.
#[derive(Debug)]
pub enum AppError {
    /// No route matches the requested path.
    NotFound(String),
    /// The path exists but does not accept the requested method.
    MethodNotAllowed { method: String, path: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::NotFound(path) => {
                warn!("No route for path: {path}");
                (StatusCode::NOT_FOUND, format!("Not found: {path}"))
            }
            AppError::MethodNotAllowed { method, path } => {
                warn!("Method {method} not allowed for path: {path}");
                (
                    StatusCode::METHOD_NOT_ALLOWED,
                    format!("Method {method} not allowed for {path}"),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
