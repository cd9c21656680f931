//! Query-string extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Deserializes the query string into `T` and then runs `T::validate()`.
/// Deserialization failures (unknown enum tokens, non-numeric values) become
/// `400 INVALID_QUERY`; validation failures become `400 VALIDATION_ERROR`
/// with per-field details.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[validate(range(min = 1, max = 100))]
///     size: u32,
/// }
///
/// async fn list(ValidatedQuery(paging): ValidatedQuery<Paging>) -> String {
///     format!("size = {}", paging.size)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}
