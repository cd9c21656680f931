use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors_layer_from_origins, create_permissive_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::Environment;
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

/// Creates a configured Axum router with common middleware and documentation.
///
/// - OpenAPI documentation (ReDoc at `/redoc`, Scalar at `/scalar`)
/// - API routes nested under `/api`
/// - Tracing, security headers, CORS and compression layers
/// - JSON 404 fallback
///
/// Health endpoints are added by the app with [`health_router`](super::health_router).
///
/// # CORS
///
/// Origins come from `ServerConfig::cors_allowed_origins`. When none are
/// configured a permissive layer is used in development; in production the
/// list is mandatory.
///
/// # Errors
/// Returns `InvalidInput` if CORS origins are missing in production or
/// contain invalid values.
pub fn create_router<T>(
    apis: Router,
    server_config: &ServerConfig,
    environment: &Environment,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = if server_config.cors_allowed_origins.is_empty() {
        if environment.is_production() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN environment variable is required in production. Example: CORS_ALLOWED_ORIGIN=https://example.com",
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        create_permissive_cors_layer()
    } else {
        info!(
            "CORS configured with allowed origins: {}",
            server_config.cors_allowed_origins.join(",")
        );
        cors_layer_from_origins(&server_config.cors_allowed_origins)?
    };

    let router = Router::new()
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves the router with coordinated shutdown and cleanup.
///
/// On SIGINT/SIGTERM the server stops accepting connections and lets
/// in-flight requests finish. Only then does `cleanup` run, bounded by
/// `server_config.shutdown_timeout`.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_production_app;
///
/// create_production_app(router, &config.server, async move {
///     producer.flush().await;
/// }).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_with_shutdown(
        listener,
        router,
        coordinator,
        server_config.shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serves on an already bound listener until `coordinator` fires, then runs
/// `cleanup` once every connection has drained.
pub async fn serve_with_shutdown<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
