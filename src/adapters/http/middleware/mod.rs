//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `request_id` - Per-request correlation id middleware and extractor
//! - `logging` - Request logging with status-based severity

pub mod logging;
pub mod request_id;

pub use logging::request_logging_middleware;
pub use request_id::{request_id_middleware, RequestId, RequestIdRejection, REQUEST_ID_HEADER};
