//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional `config.yaml` file,
//! overridden by environment variables with the `APP_` prefix and `__` as
//! the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use axum_template::config::AppSettings;
//!
//! let settings = AppSettings::load().expect("Failed to load configuration");
//! settings.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", settings.server.socket_addr());
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppSettings::load()`], which merges the `config.yaml` file
/// (if present) with environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (MySQL connection and pool sizing)
    pub database: DatabaseConfig,
}

impl AppSettings {
    /// Load configuration from `config.yaml` and environment variables
    ///
    /// This function:
    /// 1. Loads a `.env` file if present (for development)
    /// 2. Reads `config.yaml` from the working directory when it exists
    /// 3. Overrides with environment variables using the `APP` prefix and
    ///    `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `APP__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `APP__DATABASE__PASSWORD=...` -> `database.password = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required values are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default().prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
