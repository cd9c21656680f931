use crate::{env_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means "not configured".
    pub cors_allowed_origins: Vec<String>,
    /// Upper bound for cleanup work once a shutdown signal arrives
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            ..Default::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to 0.0.0.0
    /// - PORT: defaults to 8080
    /// - CORS_ALLOWED_ORIGIN: comma separated, defaults to none
    /// - SHUTDOWN_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = parse_var("PORT", "8080")?;
        let shutdown_secs: u64 = parse_var("SHUTDOWN_TIMEOUT_SECS", "30")?;

        let cors_allowed_origins = env_or_default("CORS_ALLOWED_ORIGIN", "")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            cors_allowed_origins: Vec::new(),
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}
