//! HTTP routes for demo endpoints.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    batch_create_demos, create_demo, get_demo, hard_delete_demo, list_demos, list_demos_page,
    soft_delete_demo, update_demo, DemoState,
};
use crate::application::DemoService;

/// Creates the demo router with all endpoints.
pub fn demo_routes(service: Arc<DemoService>) -> Router {
    Router::new()
        .route("/", get(list_demos).post(create_demo))
        .route("/page", get(list_demos_page))
        .route("/batch", post(batch_create_demos))
        .route("/:id", get(get_demo).put(update_demo))
        .route("/soft/:id", delete(soft_delete_demo))
        .route("/hard/:id", delete(hard_delete_demo))
        .with_state(DemoState::new(service))
}
