//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes, middleware and the response envelope
//! - `mysql` - MySQL implementations of the repository ports

pub mod http;
pub mod mysql;
