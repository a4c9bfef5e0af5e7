//! Error types shared by every layer.
//!
//! Lower layers (repositories, services) classify failures into [`AppError`]
//! and propagate them without logging; the HTTP error translator is the only
//! place a failure is logged and turned into a response.

use std::fmt;

use thiserror::Error;

/// Business error codes, grouped by concern.
///
/// The numeric values are part of the wire contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Parameter errors
    ParamInvalid,
    ParamBind,
    ParamType,
    ParamOutOfRange,
    DataFormat,

    // Authorization errors
    PermissionDenied,

    // Resource errors
    ResourceNotFound,
    DuplicateKey,

    // Server errors
    Internal,
}

impl ErrorCode {
    /// Numeric code carried in the response envelope.
    pub const fn value(self) -> i32 {
        match self {
            ErrorCode::ParamInvalid => 10001,
            ErrorCode::ParamBind => 10002,
            ErrorCode::ParamType => 10003,
            ErrorCode::ParamOutOfRange => 10004,
            ErrorCode::DataFormat => 10005,
            ErrorCode::PermissionDenied => 20001,
            ErrorCode::ResourceNotFound => 30001,
            ErrorCode::DuplicateKey => 30002,
            ErrorCode::Internal => 50001,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Application error taxonomy.
///
/// A closed set of failure kinds produced by any layer below the HTTP
/// boundary. The translator in `adapters::http` matches exhaustively over
/// these variants to pick an HTTP status, business code and user message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Expected, domain-level failure the caller should see verbatim.
    #[error("{message}")]
    Business { code: ErrorCode, message: String },

    /// Unexpected or infrastructure failure wrapping the underlying cause.
    #[error("{source}")]
    System {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Malformed or unbindable input (body, query or path binding).
    #[error("{0}")]
    Validation(String),

    /// Anything that escaped classification.
    #[error("unknown server error")]
    Unknown,
}

impl AppError {
    /// Creates a business error with a code and a user-facing message.
    pub fn business(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::Business {
            code,
            message: message.into(),
        }
    }

    /// Creates a system error wrapping an underlying cause.
    pub fn system(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        AppError::System {
            source: source.into(),
        }
    }

    /// Creates a validation error from a binding failure message.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Creates a resource-not-found business error.
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::business(ErrorCode::ResourceNotFound, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_values_are_stable() {
        assert_eq!(ErrorCode::ParamInvalid.value(), 10001);
        assert_eq!(ErrorCode::ParamBind.value(), 10002);
        assert_eq!(ErrorCode::PermissionDenied.value(), 20001);
        assert_eq!(ErrorCode::ResourceNotFound.value(), 30001);
        assert_eq!(ErrorCode::DuplicateKey.value(), 30002);
        assert_eq!(ErrorCode::Internal.value(), 50001);
    }

    #[test]
    fn business_error_displays_message() {
        let err = AppError::business(ErrorCode::ResourceNotFound, "demo not found");
        assert_eq!(format!("{}", err), "demo not found");
    }

    #[test]
    fn system_error_displays_wrapped_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = AppError::system(io);
        assert_eq!(format!("{}", err), "connection refused");
    }

    #[test]
    fn validation_error_displays_binding_message() {
        let err = AppError::validation("missing field `field2`");
        assert_eq!(format!("{}", err), "missing field `field2`");
    }

    #[test]
    fn unknown_error_has_generic_message() {
        assert_eq!(format!("{}", AppError::Unknown), "unknown server error");
    }

    #[test]
    fn not_found_uses_resource_not_found_code() {
        match AppError::not_found("gone") {
            AppError::Business { code, .. } => assert_eq!(code, ErrorCode::ResourceNotFound),
            other => panic!("expected business error, got {:?}", other),
        }
    }
}
