use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BeerError {
    #[error("Beer not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

pub type BeerResult<T> = Result<T, BeerError>;

/// Convert BeerError to AppError for standardized error responses
impl From<BeerError> for AppError {
    fn from(err: BeerError) -> Self {
        match err {
            BeerError::NotFound(id) => AppError::NotFound(format!("Beer {} not found", id)),
            BeerError::InvalidInput(msg) => AppError::BadRequest(msg),
            BeerError::Repository(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BeerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<axum_helpers::pagination::InvalidPageSize> for BeerError {
    fn from(err: axum_helpers::pagination::InvalidPageSize) -> Self {
        BeerError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (BeerError::NotFound(Uuid::nil()), StatusCode::NOT_FOUND),
            (
                BeerError::InvalidInput("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                BeerError::Repository("lock poisoned".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_invalid_page_size_is_bad_request() {
        let err = BeerError::from(axum_helpers::pagination::InvalidPageSize);
        assert!(matches!(err, BeerError::InvalidInput(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
