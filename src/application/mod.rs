//! Application layer - service orchestration between HTTP and persistence.
//!
//! Services own DTO-free business rules: existence checks, patch validation
//! and the mapping between transport intent and repository calls.

pub mod demo;

pub use demo::DemoService;
