//! Request-id middleware and extractor for axum.
//!
//! This module provides:
//! - `request_id_middleware` - Layer that establishes the per-request id
//! - `RequestId` - Typed per-request identifier, usable as an extractor
//!
//! # Architecture
//!
//! ```text
//! Request → request_id_middleware → injects RequestId into extensions
//!                                            ↓
//!                                    Handler → RequestId extractor reads it
//!                                            ↓
//!                                    Response ← X-Request-Id echoed back
//! ```
//!
//! A caller-supplied `X-Request-Id` header is trusted verbatim as long as it
//! is non-empty; otherwise a fresh UUID is generated. Every log line and
//! every envelope emitted during the request carries the same value.

use std::fmt;

use axum::extract::Request;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::adapters::http::response::failure;
use crate::domain::error::ErrorCode;

/// Header carrying the request id, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Typed per-request identifier.
///
/// Lives in the request extensions for the lifetime of one request; never
/// shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Wraps a caller-supplied id.
    pub fn new(value: impl Into<String>) -> Self {
        RequestId(value.into())
    }

    /// Generates a fresh UUID-backed id.
    pub fn generate() -> Self {
        RequestId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Middleware that establishes the request id.
///
/// This middleware:
/// 1. Reads `X-Request-Id` from the inbound request
/// 2. Uses any non-empty value verbatim, otherwise generates a UUID
/// 3. Injects the typed [`RequestId`] into request extensions
/// 4. Echoes the id back on the response header
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(RequestId::new)
        .unwrap_or_else(RequestId::generate);

    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = RequestIdRejection;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestId>()
            .cloned()
            .ok_or(RequestIdRejection)
    }
}

/// Rejection for routes reached without the request-id layer installed.
#[derive(Debug, Clone)]
pub struct RequestIdRejection;

impl IntoResponse for RequestIdRejection {
    fn into_response(self) -> Response {
        failure(
            &RequestId::new(""),
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Internal.value(),
            "request id missing from request extensions",
        )
    }
}
