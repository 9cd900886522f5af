//! # Application State
//!
//! The `AppState` holds the configuration after it has been checked against
//! the filesystem and parsed into the values the router is assembled from.
//! The placeholder handlers themselves are stateless, so the state is consumed
//! by `create_router` rather than handed to handlers.

use crate::config::AppConfig;
use axum::http::HeaderValue;
use std::{path::Path, sync::Arc};
use tracing::info;

/// The resolved server state the router is built from.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml` and the environment.
    pub config: Arc<AppConfig>,
    /// Parsed `cors_allowed_origins`. Empty allows any origin.
    pub cors_origins: Vec<HeaderValue>,
}

/// Builds the shared application state from the configuration.
///
/// Fails when a configured `static_dir` does not point at a directory, or when
/// a CORS origin is not a valid header value.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if let Some(dir) = &config.static_dir {
        if !Path::new(dir).is_dir() {
            anyhow::bail!("static_dir '{dir}' is not a directory");
        }
        info!("Serving static files from '{dir}' at '{}'.", config.static_url);
    }

    let cors_origins = config.cors_origins()?;

    Ok(AppState {
        config: Arc::new(config),
        cors_origins,
    })
}
