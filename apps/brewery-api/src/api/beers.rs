//! Beer API routes

use axum::Router;
use domain_beers::{handlers, RepositoryBeerService};

use crate::state::AppState;

/// Create beers router
pub fn router(state: &AppState) -> Router {
    let service = RepositoryBeerService::new(state.repository.clone());
    handlers::router(service)
}
