//! Brewery API - REST server for the beer catalog

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Full application router: `/api/v1/beer`, docs and `/health`.
fn build_app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.server,
        &state.config.environment,
    )?;
    Ok(router.merge(health_router(state.config.app)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    if state.repository.is_empty().await {
        warn!("Beer repository is empty, listings will return no content");
    } else {
        info!(
            beers = state.repository.len().await,
            "Beer repository ready"
        );
    }

    let app = build_app(&state)?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    // The catalog lives in process memory; nothing to flush on exit.
    create_production_app(app, &state.config.server, async {})
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Brewery API shutdown complete");
    Ok(())
}
