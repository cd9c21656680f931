//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the Axum web applications.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (UUID path, validated query)
//! - **[`pagination`]**: Page requests and the paged-result envelope
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{Environment, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, &config, &Environment::Development)?;
//!
//!     create_production_app(router, &config, async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod pagination;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
    serve_with_shutdown, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{
    cors_layer_from_origins, create_cors_layer, create_permissive_cors_layer, security_headers,
};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedQuery};

// Re-export pagination types
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, Pageable, PagedResult};
