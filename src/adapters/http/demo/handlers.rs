//! HTTP handlers for demo endpoints.
//!
//! Each handler follows the same pipeline: bind input (binding failures
//! become validation errors), call the service, then route the outcome
//! through the envelope builders or the error translator. Exactly one
//! response is written per request.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;

use super::dto::{
    CreateDemoRequest, CreateDemoResponse, DemoListQuery, DemoResponse, PageQuery,
    UpdateDemoRequest,
};
use crate::adapters::http::error::respond_error;
use crate::adapters::http::middleware::RequestId;
use crate::adapters::http::response::{success, success_page};
use crate::application::DemoService;
use crate::domain::error::AppError;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DemoState {
    pub service: Arc<DemoService>,
}

impl DemoState {
    pub fn new(service: Arc<DemoService>) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - list rows with optional equality filters
pub async fn list_demos(
    State(state): State<DemoState>,
    request_id: RequestId,
    query: Result<Query<DemoListQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };

    match state.service.list(query.into()).await {
        Ok(rows) => {
            let rows: Vec<DemoResponse> = rows.iter().map(DemoResponse::from).collect();
            success(&request_id, "fetched successfully", Some(rows))
        }
        Err(err) => respond_error(&request_id, err),
    }
}

/// GET /page - paginated list
pub async fn list_demos_page(
    State(state): State<DemoState>,
    request_id: RequestId,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };
    let (page, page_size) = query.normalize();

    match state.service.list_page(page, page_size).await {
        Ok((rows, total)) => {
            let rows: Vec<DemoResponse> = rows.iter().map(DemoResponse::from).collect();
            success_page(
                &request_id,
                "fetched successfully",
                total,
                page,
                page_size,
                rows,
            )
        }
        Err(err) => respond_error(&request_id, err),
    }
}

/// GET /:id - fetch one row
pub async fn get_demo(
    State(state): State<DemoState>,
    request_id: RequestId,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };

    match state.service.get(id).await {
        Ok(demo) => success(
            &request_id,
            "fetched successfully",
            Some(DemoResponse::from(&demo)),
        ),
        Err(err) => respond_error(&request_id, err),
    }
}

/// POST / - create one row
pub async fn create_demo(
    State(state): State<DemoState>,
    request_id: RequestId,
    payload: Result<Json<CreateDemoRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };

    match state.service.create(payload.into()).await {
        Ok(id) => success(
            &request_id,
            "created successfully",
            Some(CreateDemoResponse { id }),
        ),
        Err(err) => respond_error(&request_id, err),
    }
}

/// POST /batch - create several rows
pub async fn batch_create_demos(
    State(state): State<DemoState>,
    request_id: RequestId,
    payload: Result<Json<Vec<CreateDemoRequest>>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };

    let demos = payload.into_iter().map(Into::into).collect();
    match state.service.create_batch(demos).await {
        Ok(()) => success(&request_id, "batch created successfully", None::<()>),
        Err(err) => respond_error(&request_id, err),
    }
}

/// PUT /:id - partial update
pub async fn update_demo(
    State(state): State<DemoState>,
    request_id: RequestId,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateDemoRequest>, JsonRejection>,
) -> Response {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };

    match state.service.update(id, payload.into()).await {
        Ok(()) => success(&request_id, "updated successfully", None::<()>),
        Err(err) => respond_error(&request_id, err),
    }
}

/// DELETE /soft/:id - soft delete
pub async fn soft_delete_demo(
    State(state): State<DemoState>,
    request_id: RequestId,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };

    match state.service.soft_delete(id).await {
        Ok(()) => success(&request_id, "deleted successfully", None::<()>),
        Err(err) => respond_error(&request_id, err),
    }
}

/// DELETE /hard/:id - hard delete
pub async fn hard_delete_demo(
    State(state): State<DemoState>,
    request_id: RequestId,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(id) = match path {
        Ok(path) => path,
        Err(rejection) => {
            return respond_error(&request_id, AppError::validation(rejection.body_text()))
        }
    };

    match state.service.delete(id).await {
        Ok(()) => success(&request_id, "deleted successfully", None::<()>),
        Err(err) => respond_error(&request_id, err),
    }
}
