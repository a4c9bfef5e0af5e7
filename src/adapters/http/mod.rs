//! HTTP adapters - REST API implementation.
//!
//! - `demo` - demo resource endpoints
//! - `middleware` - request-id and request-logging layers
//! - `response` - the uniform response envelope and its builders
//! - `error` - translation from the error taxonomy to failure responses

pub mod demo;
pub mod error;
pub mod middleware;
pub mod response;
mod router;

pub use router::api_router;
