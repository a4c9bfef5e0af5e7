//! Translation from the error taxonomy to HTTP failure responses.

use axum::http::StatusCode;
use axum::response::Response;

use super::middleware::RequestId;
use super::response::failure;
use crate::domain::error::{AppError, ErrorCode};

/// Maps an error to its HTTP status, business code and user-facing message.
///
/// Exhaustive over the taxonomy and infallible; the same error value always
/// yields the same triple.
pub fn translate(err: &AppError) -> (StatusCode, i32, String) {
    match err {
        AppError::Business { code, message } => {
            (StatusCode::BAD_REQUEST, code.value(), message.clone())
        }
        AppError::Validation(message) => (
            StatusCode::BAD_REQUEST,
            ErrorCode::ParamBind.value(),
            message.clone(),
        ),
        AppError::System { source } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Internal.value(),
            source.to_string(),
        ),
        AppError::Unknown => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Internal.value(),
            "unknown server error".to_string(),
        ),
    }
}

/// Translates an error and renders the failure envelope.
///
/// This is the single place a request failure is logged; lower layers only
/// classify and propagate.
pub fn respond_error(request_id: &RequestId, err: AppError) -> Response {
    let (status, code, message) = translate(&err);

    tracing::error!(
        status = status.as_u16(),
        code,
        request_id = request_id.as_str(),
        "request error: {err:?}"
    );

    failure(request_id, status, code, message)
}
