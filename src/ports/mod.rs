//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DemoRepository` - Persistence contract for the demo resource

mod demo_repository;

pub use demo_repository::DemoRepository;
