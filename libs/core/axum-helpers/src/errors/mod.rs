pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Error as UuidError;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for every error response:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Beer 0191d6a8-... not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PathExtractorRejection(e) => e.status(),
            AppError::QueryExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::UuidError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (code, message, details) = match self {
            AppError::PathExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::BadRequest.code(),
                    "Path extraction error: {:?}",
                    e
                );
                (ErrorCode::BadRequest, e.body_text(), None)
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query extraction error: {:?}",
                    e
                );
                (ErrorCode::InvalidQuery, e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::UuidError(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidUuid.code(),
                    "UUID error: {:?}",
                    e
                );
                (
                    ErrorCode::InvalidUuid,
                    ErrorCode::InvalidUuid.default_message().to_string(),
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (ErrorCode::BadRequest, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (ErrorCode::NotFound, msg, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                // Internal details stay in the logs.
                (
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Flattens validator errors into `{ field: [{code, message, params}] }`.
///
/// Field names are reported in camelCase, the spelling clients send.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (lower_camel_case(field), serde_json::Value::Array(messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

fn lower_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_code() {
        let response = AppError::NotFound("Beer x not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["code"], 1004);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Beer x not found");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_uuid_error_maps_to_400() {
        let err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INVALID_UUID");
    }

    #[derive(validator::Validate)]
    struct Paging {
        #[validate(range(min = 1))]
        page_size: u32,
        #[validate(range(max = 10))]
        offset: u32,
    }

    #[tokio::test]
    async fn test_validation_details_use_wire_field_names() {
        use validator::Validate;

        let err = Paging {
            page_size: 0,
            offset: 11,
        }
        .validate()
        .unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["pageSize"][0]["code"], "range");
        assert!(body["details"]["offset"].is_array());
        assert!(body["details"].get("page_size").is_none());
    }

    #[test]
    fn test_lower_camel_case() {
        assert_eq!(lower_camel_case("page_size"), "pageSize");
        assert_eq!(lower_camel_case("beer_style_name"), "beerStyleName");
        assert_eq!(lower_camel_case("size"), "size");
        assert_eq!(lower_camel_case("_private"), "private");
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let response =
            AppError::InternalServerError("connection reset by peer".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "An internal server error occurred");
    }
}
