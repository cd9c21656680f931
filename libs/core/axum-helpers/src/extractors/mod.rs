//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that turn malformed input into the standard
//! [`ErrorResponse`](crate::errors::ErrorResponse) body instead of axum's
//! plain-text rejections.

pub mod uuid_path;
pub mod validated_query;

pub use uuid_path::UuidPath;
pub use validated_query::ValidatedQuery;
