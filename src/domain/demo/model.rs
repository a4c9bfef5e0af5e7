//! Demo entity and its write-side value types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Soft-delete marker values stored in the `is_deleted` column.
pub const NOT_DELETED: &str = "N";
pub const DELETED: &str = "Y";

/// A row of the `demo` table.
///
/// `field1` carries a unique index; duplicate inserts surface as
/// duplicate-key business errors at the repository boundary.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Demo {
    pub id: i64,
    pub field1: i32,
    pub field2: String,
    pub is_deleted: String,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

/// Attributes for creating a demo row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDemo {
    pub field1: i32,
    pub field2: String,
}

/// Equality filters for listing demo rows. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoFilter {
    pub field1: Option<i32>,
    pub field2: Option<String>,
}

/// Partial update of a demo row.
///
/// Each `Some` field becomes one column in the update set; an empty patch is
/// rejected by the service layer before it reaches the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoPatch {
    pub field1: Option<i32>,
    pub field2: Option<String>,
}

impl DemoPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.field1.is_none() && self.field2.is_none()
    }
}
