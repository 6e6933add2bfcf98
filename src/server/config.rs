//! Environment configuration for the mock generation API.

use std::env;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Loaded once at startup. The API key and database are both optional here:
/// a missing key fails each generation request with 400, and a missing
/// database only disables persistence.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub bind_address: SocketAddr,
    pub api_key: Option<String>,
    pub database_url: Option<String>,
}

impl ApiConfig {
    /// Loads configuration from environment variables. A `.env` file is
    /// honored for local development but skipped under test to keep tests
    /// hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8788".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let api_key = env::var("MINDPAL_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            bind_address,
            api_key,
            database_url,
        })
    }
}
