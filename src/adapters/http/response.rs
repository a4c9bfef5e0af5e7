//! The uniform response envelope.
//!
//! Every response this service emits, success or failure, is one JSON
//! shape: `{ "code", "message", "data", "requestId" }`. Paginated endpoints
//! nest a page envelope inside `data`. Envelopes are built once at the HTTP
//! boundary and never mutated afterwards.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::middleware::RequestId;

/// Business code carried by every successful envelope.
pub const SUCCESS_CODE: i32 = 200;

const DEFAULT_SUCCESS_MESSAGE: &str = "success";

/// The single wire shape for every response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
    pub request_id: String,
}

/// Page payload nested inside `ResponseEnvelope.data` for list endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
    pub list: Vec<T>,
}

/// Renders a success envelope with HTTP 200.
///
/// An empty message defaults to `"success"`.
pub fn success<T: Serialize>(request_id: &RequestId, message: &str, data: Option<T>) -> Response {
    let message = if message.is_empty() {
        DEFAULT_SUCCESS_MESSAGE
    } else {
        message
    };

    (
        StatusCode::OK,
        Json(ResponseEnvelope {
            code: SUCCESS_CODE,
            message: message.to_string(),
            data,
            request_id: request_id.to_string(),
        }),
    )
        .into_response()
}

/// Renders a paginated success envelope.
pub fn success_page<T: Serialize>(
    request_id: &RequestId,
    message: &str,
    total: i64,
    page: u32,
    page_size: u32,
    list: Vec<T>,
) -> Response {
    success(
        request_id,
        message,
        Some(PageEnvelope {
            total,
            page,
            page_size,
            list,
        }),
    )
}

/// Renders a failure envelope with the given HTTP status.
///
/// `data` is always null on failure. Nothing may write to the response
/// after this envelope is produced.
pub fn failure(
    request_id: &RequestId,
    status: StatusCode,
    code: i32,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(ResponseEnvelope::<()> {
            code,
            message: message.into(),
            data: None,
            request_id: request_id.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope_json<T: Serialize>(envelope: &ResponseEnvelope<T>) -> serde_json::Value {
        serde_json::to_value(envelope).unwrap()
    }

    #[test]
    fn envelope_serializes_with_camel_case_request_id() {
        let envelope = ResponseEnvelope {
            code: 200,
            message: "success".to_string(),
            data: Some(json!({"id": 1})),
            request_id: "abc-123".to_string(),
        };
        let value = envelope_json(&envelope);
        assert_eq!(value["code"], 200);
        assert_eq!(value["message"], "success");
        assert_eq!(value["data"]["id"], 1);
        assert_eq!(value["requestId"], "abc-123");
    }

    #[test]
    fn failure_envelope_has_null_data() {
        let envelope = ResponseEnvelope::<()> {
            code: 30001,
            message: "demo not found".to_string(),
            data: None,
            request_id: "abc-123".to_string(),
        };
        let value = envelope_json(&envelope);
        assert!(value["data"].is_null());
        assert_eq!(value["code"], 30001);
    }

    #[test]
    fn page_envelope_serializes_exact_shape() {
        let envelope = PageEnvelope {
            total: 42,
            page: 2,
            page_size: 10,
            list: vec![json!({"id": 11})],
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"total": 42, "page": 2, "pageSize": 10, "list": [{"id": 11}]})
        );
    }

    #[test]
    fn success_defaults_empty_message() {
        let response = success(&RequestId::new("req-1"), "", Some(json!([])));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
