//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Errors raised while loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `SSP_API_KEY` is unset or blank.
    #[error("SSP_API_KEY environment variable is required")]
    MissingApiKey,

    /// A variable is present but could not be parsed (e.g. a non-numeric `PORT`).
    #[error("Invalid environment configuration: {0}")]
    Environment(#[from] envy::Error),
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SSP_API_KEY` (required): shared key expected in the `X-API-Key` header
/// - `PORT` (optional): HTTP server port, defaults to 3000
#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ssp_api_key: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

// The key must never end up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("ssp_api_key", &"[REDACTED]")
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `SSP_API_KEY` is missing or empty
    /// - `PORT` cannot be parsed as a port number
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        if dotenvy::dotenv().is_err() {
            tracing::debug!(".env file not found, using process environment");
        }

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an arbitrary set of key/value pairs.
    ///
    /// Field names are matched case-insensitively: ssp_api_key <- SSP_API_KEY
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)?;

        if config.ssp_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(config)
    }
}
