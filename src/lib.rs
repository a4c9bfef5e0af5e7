//! Axum Template - layered web service scaffold.
//!
//! This crate wires configuration, a MySQL connection pool, request
//! middleware and a single CRUD resource behind a uniform JSON response
//! envelope with a unified error pipeline.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
