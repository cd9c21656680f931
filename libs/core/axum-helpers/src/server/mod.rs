//! Server infrastructure module.
//!
//! - Application setup with OpenAPI documentation
//! - Health endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.server, &config.environment)?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config.server, async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_with_shutdown};
pub use health::{HealthResponse, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
