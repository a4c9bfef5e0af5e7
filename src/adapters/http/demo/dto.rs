//! HTTP DTOs for demo endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};

use crate::domain::demo::{Demo, DemoFilter, DemoPatch, NewDemo};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Optional equality filters for the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoListQuery {
    pub field1: Option<i32>,
    pub field2: Option<String>,
}

impl From<DemoListQuery> for DemoFilter {
    fn from(query: DemoListQuery) -> Self {
        DemoFilter {
            field1: query.field1,
            field2: query.field2,
        }
    }
}

/// Pagination parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Normalized `(page, page_size)`: page below 1 becomes 1, page size
    /// below 1 becomes 10.
    pub fn normalize(&self) -> (u32, u32) {
        let page = self.page.filter(|p| *p >= 1).unwrap_or(1);
        let page_size = self.page_size.filter(|s| *s >= 1).unwrap_or(10);
        (page, page_size)
    }
}

/// Request to create a demo row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDemoRequest {
    pub field1: i32,
    pub field2: String,
}

impl From<CreateDemoRequest> for NewDemo {
    fn from(request: CreateDemoRequest) -> Self {
        NewDemo {
            field1: request.field1,
            field2: request.field2,
        }
    }
}

/// Request to partially update a demo row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDemoRequest {
    pub field1: Option<i32>,
    pub field2: Option<String>,
}

impl From<UpdateDemoRequest> for DemoPatch {
    fn from(request: UpdateDemoRequest) -> Self {
        DemoPatch {
            field1: request.field1,
            field2: request.field2,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A demo row as returned by list and detail endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct DemoResponse {
    pub id: i64,
    pub field1: i32,
    pub field2: String,
}

impl From<&Demo> for DemoResponse {
    fn from(demo: &Demo) -> Self {
        DemoResponse {
            id: demo.id,
            field1: demo.field1,
            field2: demo.field2.clone(),
        }
    }
}

/// Response for a successful create.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDemoResponse {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_deserializes_with_partial_filters() {
        let query: DemoListQuery = serde_json::from_str(r#"{"field1": 7}"#).unwrap();
        assert_eq!(query.field1, Some(7));
        assert_eq!(query.field2, None);
    }

    #[test]
    fn page_query_normalizes_missing_values() {
        let query = PageQuery {
            page: None,
            page_size: None,
        };
        assert_eq!(query.normalize(), (1, 10));
    }

    #[test]
    fn page_query_normalizes_zero_values() {
        let query = PageQuery {
            page: Some(0),
            page_size: Some(0),
        };
        assert_eq!(query.normalize(), (1, 10));
    }

    #[test]
    fn page_query_keeps_valid_values() {
        let query = PageQuery {
            page: Some(2),
            page_size: Some(25),
        };
        assert_eq!(query.normalize(), (2, 25));
    }

    #[test]
    fn update_request_maps_to_patch() {
        let request: UpdateDemoRequest =
            serde_json::from_str(r#"{"field2": "renamed"}"#).unwrap();
        let patch: DemoPatch = request.into();
        assert_eq!(patch.field1, None);
        assert_eq!(patch.field2.as_deref(), Some("renamed"));
    }

    #[test]
    fn demo_response_serializes_expected_fields() {
        let demo = Demo {
            id: 3,
            field1: 7,
            field2: "seven".to_string(),
            is_deleted: "N".to_string(),
            create_time: None,
            update_time: None,
        };
        let value = serde_json::to_value(DemoResponse::from(&demo)).unwrap();
        assert_eq!(value, serde_json::json!({"id": 3, "field1": 7, "field2": "seven"}));
    }
}
