//! Request logging middleware.
//!
//! Runs unconditionally around every handler and records method, path,
//! client address, latency, final status and the request id. Severity
//! follows the final status code: 5xx at error, 4xx at warn, the rest at
//! info.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

use super::request_id::RequestId;

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    // Present only when served with connect-info; absent under test harnesses.
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let start = Instant::now();
    let response = next.run(request).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    if status >= 500 {
        tracing::error!(%method, path, client, ?latency, status, request_id, "request failed");
    } else if status >= 400 {
        tracing::warn!(%method, path, client, ?latency, status, request_id, "request rejected");
    } else {
        tracing::info!(%method, path, client, ?latency, status, request_id, "request completed");
    }

    response
}
