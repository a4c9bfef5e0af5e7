//! Top-level API router and cross-cutting layers.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use super::demo::demo_routes;
use super::middleware::{request_id_middleware, request_logging_middleware, RequestId};
use super::response::success;
use crate::application::DemoService;
use crate::config::ServerConfig;

/// GET /api/health - liveness probe
async fn health(request_id: RequestId) -> Response {
    success(&request_id, "", None::<()>)
}

/// Assembles the application router.
///
/// Layer order matters: the request-id layer sits outside the logging layer
/// so every log line carries the id, and both sit inside CORS and timeout.
pub fn api_router(service: Arc<DemoService>, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .nest("/demo", demo_routes(service));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        CorsLayer::new().allow_origin(origins)
    }
}
