//! Demo service module.

mod service;

pub use service::DemoService;
