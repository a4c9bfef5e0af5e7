//! HTTP adapter for demo endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateDemoRequest, CreateDemoResponse, DemoListQuery, DemoResponse, PageQuery,
    UpdateDemoRequest,
};
pub use handlers::DemoState;
pub use routes::demo_routes;
