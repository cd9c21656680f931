//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// Parses the single path parameter as a UUID. Anything that is not a UUID
/// is rejected with `400 INVALID_UUID`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_beer(UuidPath(id): UuidPath) -> String {
///     format!("Beer ID: {}", id)
/// }
///
/// let app = Router::new().route("/beer/{id}", get(get_beer));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;
        let uuid = Uuid::parse_str(&id)?;
        Ok(UuidPath(uuid))
    }
}
