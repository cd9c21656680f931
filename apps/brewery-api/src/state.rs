//! Application state management

use domain_beers::{seed, InMemoryBeerRepository};
use tracing::info;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub repository: InMemoryBeerRepository,
}

impl AppState {
    /// Build the state, loading the starter catalog when `seed_data` is set.
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_data {
            let beers = seed::sample_beers();
            info!(count = beers.len(), "Loading starter beer catalog");
            InMemoryBeerRepository::with_beers(beers)
        } else {
            InMemoryBeerRepository::new()
        };

        Self { config, repository }
    }
}
