//! Configuration for Brewery API

use core_config::{app_info, env_bool, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Load the starter catalog into the repository at startup
    pub seed_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let seed_data = env_bool("BEER_SEED_DATA", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_data,
        })
    }
}
