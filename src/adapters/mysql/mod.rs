//! MySQL adapter - connection pool and repository implementations.

mod demo_repository;
mod error;

pub use demo_repository::MySqlDemoRepository;
pub use error::{classify_duplicate_key, parse_duplicate_entry, unique_violation, UniqueViolation};

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

/// Opens the MySQL connection pool from validated configuration.
///
/// Pool sizing and connection lifetime come straight from the config; a
/// failure here is startup-fatal and surfaces before the server binds.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_open_connections)
        .min_connections(config.max_idle_connections)
        .max_lifetime(config.connection_max_lifetime())
        .connect(&config.dsn())
        .await
}
