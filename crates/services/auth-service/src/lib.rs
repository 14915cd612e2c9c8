//! Auth Service Library
//!
//! Resolves a login name (the user's email) into a [`domain::Principal`]
//! from the user collection, and checks candidate passwords against it.

pub mod config;
pub mod resolver;

use std::sync::Arc;

use store_service_lib::infra::Database;
use store_service_lib::repository::Persistence;
use tracing::info;

use crate::config::AuthServiceConfig;
use crate::resolver::{DeletedUserPolicy, IdentityResolver};

/// Build a resolver over the configured database.
pub async fn build_resolver(
    config: &AuthServiceConfig,
) -> Result<IdentityResolver, Box<dyn std::error::Error>> {
    // Schema changes belong to `store-service migrate`
    let db = Database::connect_without_migrations(&config.database).await?;
    let persistence = Persistence::new(db.get_connection());

    let policy = if config.reject_deleted_users {
        DeletedUserPolicy::Reject
    } else {
        DeletedUserPolicy::Allow
    };
    info!(?policy, "Identity resolver ready");

    Ok(IdentityResolver::new(persistence.users()).with_deleted_policy(policy))
}

/// Resolve a single login and print its principal (for CLI commands).
pub async fn resolve_login(login: &str) -> Result<(), Box<dyn std::error::Error>> {
    use crate::resolver::UserDetailsService;

    let config = AuthServiceConfig::from_env();
    let resolver: Arc<dyn UserDetailsService> = Arc::new(build_resolver(&config).await?);

    let principal = resolver.load_user_by_username(login).await?;
    let roles: Vec<&str> = principal.roles.iter().map(String::as_str).collect();
    println!("{} [{}]", principal.login_name, roles.join(", "));

    Ok(())
}
