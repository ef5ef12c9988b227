//! Application configuration loaded from environment variables.

use std::env;

use scribe_infra::DatabaseConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    // Key::derive_from needs at least 32 bytes of input.
    #[error("SECRET_KEY must be at least 32 bytes")]
    WeakSecretKey,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Signs the session cookie.
    pub secret_key: String,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` and `SECRET_KEY` are required; the blog has nothing to
    /// serve without its database and cannot sign sessions without a key.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let secret_key =
            env::var("SECRET_KEY").map_err(|_| ConfigError::MissingVar("SECRET_KEY"))?;
        if secret_key.len() < 32 {
            return Err(ConfigError::WeakSecretKey);
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            secret_key,
            database: DatabaseConfig {
                url,
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
                min_connections: env::var("DB_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2),
            },
        })
    }
}
