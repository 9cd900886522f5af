use super::{handlers, state::AppState};
use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::HeaderValue,
    routing::{get, get_service, post},
    Router,
};
use puxa::constants::{ANALYZE_PATH, DEFLUFF_SCORE_PATH, FACT_CHECK_PATH, HEALTH_PATH, ROOT_PATH};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let config = app_state.config;

    let mut router = Router::new()
        .route(ROOT_PATH, get(handlers::root))
        .route(HEALTH_PATH, get(handlers::health_check))
        .route(ANALYZE_PATH, post(handlers::analyze_content_handler))
        .route(FACT_CHECK_PATH, post(handlers::fact_check_handler))
        .route(DEFLUFF_SCORE_PATH, post(handlers::defluff_score_handler));

    if let Some(dir) = &config.static_dir {
        // The nested service answers for the whole prefix, so it carries its
        // own JSON fallbacks for missing files and wrong methods.
        let static_files = get_service(
            ServeDir::new(dir).not_found_service(handlers::not_found.into_service()),
        )
        .fallback(handlers::method_not_allowed);
        router = router.nest_service(&config.static_url, static_files);
    }

    router
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(app_state.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer. An empty origin list allows any origin.
fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed_origins))
    }
}
