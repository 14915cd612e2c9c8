//! Store service configuration.

use common::DatabaseConfig;

/// Environment variable consulted before `DATABASE_URL`
pub const DATABASE_URL_VAR: &str = "STORE_SERVICE_DATABASE_URL";

/// Store service configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl StoreServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(DATABASE_URL_VAR),
        }
    }
}
