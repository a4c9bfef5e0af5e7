//! Classification of raw MySQL errors into the application taxonomy.
//!
//! The only vendor-specific signal the application cares about is the
//! duplicate-key rejection (MySQL error 1062, `ER_DUP_ENTRY`). Its message
//! follows the convention `Duplicate entry '<value>' for key '<table>.<field>'`,
//! which is parsed best-effort to recover the colliding field and value.

use sqlx::mysql::MySqlDatabaseError;

use crate::domain::error::{AppError, ErrorCode};

/// MySQL error number for a unique-index collision.
const ER_DUP_ENTRY: u16 = 1062;

/// A classified unique-constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueViolation {
    pub field: String,
    pub value: String,
}

/// Converts a write-path database error into the application taxonomy.
///
/// Unique-key collisions become duplicate-key business errors citing the
/// offending field; everything else is a system error wrapping the cause.
pub(crate) fn map_write_error(err: sqlx::Error) -> AppError {
    match unique_violation(&err) {
        Some(v) => AppError::business(
            ErrorCode::DuplicateKey,
            format!("duplicate value '{}' for field '{}'", v.value, v.field),
        ),
        None => AppError::system(err),
    }
}

/// Converts a read-path database error into a system error.
pub(crate) fn map_query_error(err: sqlx::Error) -> AppError {
    AppError::system(err)
}

/// Inspects a raw sqlx error for a MySQL unique-index collision.
pub fn unique_violation(err: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = match err {
        sqlx::Error::Database(db_err) => db_err,
        _ => return None,
    };
    let mysql_err = db_err.try_downcast_ref::<MySqlDatabaseError>()?;
    classify_duplicate_key(mysql_err.number(), mysql_err.message())
}

/// Classifies a MySQL (number, message) pair.
///
/// Returns `None` unless the number is 1062. When the message does not carry
/// the expected delimiters the violation is still reported, with an
/// `"unknown"` field and an empty value.
pub fn classify_duplicate_key(number: u16, message: &str) -> Option<UniqueViolation> {
    if number != ER_DUP_ENTRY {
        return None;
    }
    Some(parse_duplicate_entry(message).unwrap_or(UniqueViolation {
        field: "unknown".to_string(),
        value: String::new(),
    }))
}

/// Parses `Duplicate entry '<value>' for key '<table>.<field>'`.
pub fn parse_duplicate_entry(message: &str) -> Option<UniqueViolation> {
    const ENTRY_MARKER: &str = "Duplicate entry '";

    let value_start = message.find(ENTRY_MARKER)? + ENTRY_MARKER.len();
    let value_len = message[value_start..].find('\'')?;
    let value = &message[value_start..value_start + value_len];

    let dot = message.rfind('.')?;
    let closing_quote = message.rfind('\'')?;
    if closing_quote <= dot {
        return None;
    }
    let field = &message[dot + 1..closing_quote];

    Some(UniqueViolation {
        field: field.to_string(),
        value: value.to_string(),
    })
}
