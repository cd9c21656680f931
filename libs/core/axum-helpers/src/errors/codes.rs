//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - a string representation for clients (e.g., "VALIDATION_ERROR")
//! - an integer code for logging and monitoring (e.g., 1001)
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid UUID format in path or query parameter
    InvalidUuid,

    /// Requested resource was not found
    NotFound,

    /// Request is malformed in some other way
    BadRequest,

    /// Query string could not be parsed into the expected parameters
    InvalidQuery,

    /// HTTP method is not supported on this resource
    MethodNotAllowed,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code used in structured logs and metrics.
    ///
    /// Client and server errors share the 1000-1999 range.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::InvalidQuery => 1012,
            Self::BadRequest => 1013,
            Self::MethodNotAllowed => 1014,
        }
    }

    /// Default user-facing message. Handlers may override it with specifics.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::InvalidQuery => "Invalid query parameters",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
