//! Auth service configuration.

use common::{env_flag, DatabaseConfig};

/// Environment variable consulted before `DATABASE_URL`
pub const DATABASE_URL_VAR: &str = "STORE_SERVICE_DATABASE_URL";

/// Set to a truthy value to treat soft-deleted accounts as unknown
pub const REJECT_DELETED_USERS_VAR: &str = "AUTH_REJECT_DELETED_USERS";

/// Auth service configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Database holding the user collection
    pub database: DatabaseConfig,
    /// Refuse to resolve soft-deleted users
    pub reject_deleted_users: bool,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(DATABASE_URL_VAR),
            reject_deleted_users: env_flag(REJECT_DELETED_USERS_VAR),
        }
    }
}
