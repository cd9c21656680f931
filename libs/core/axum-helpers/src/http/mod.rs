//! HTTP middleware module.
//!
//! - CORS configuration
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer_from_origins, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(cors_layer_from_origins(&origins)?);
//! ```

pub mod cors;
pub mod security;

pub use cors::{cors_layer_from_origins, create_cors_layer, create_permissive_cors_layer};
pub use security::security_headers;
