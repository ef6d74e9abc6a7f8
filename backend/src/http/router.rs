//! Router configuration for the HTTP API.
//!
//! Sets up the routes and middleware (CORS, body limit, tracing) and returns
//! an axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers;
use crate::config::ServerConfig;

/// Create the application router from `config`.
pub fn create_router(config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/healthcheck", get(handlers::health_check))
        .route("/schedules", post(handlers::humanize_opening_hours));

    // axum refuses to nest at the root, so an empty prefix merges instead.
    let router = if config.api_prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&config.api_prefix, api)
    };

    router
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
}

/// CORS for the configured origins; an empty list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
