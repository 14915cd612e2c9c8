//! Resolver tests against an in-memory SQLite user collection.

use std::sync::Arc;

use auth_service_lib::build_resolver;
use auth_service_lib::config::AuthServiceConfig;
use auth_service_lib::resolver::{DeletedUserPolicy, IdentityResolver, UserDetailsService};
use common::{AppError, DatabaseConfig};
use domain::{Password, User, ROLE_USER};
use store_service_lib::infra::Database;
use store_service_lib::repository::{Persistence, UserRepository};

async fn users_with(seed: Vec<User>) -> Arc<dyn UserRepository> {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    let users = Persistence::new(db.get_connection()).users();
    for user in seed {
        users.save(user).await.expect("seed user");
    }
    users
}

fn user(username: &str, email: &str, password: &str, deleted: bool) -> User {
    let mut user = User::new(username.to_string(), email.to_string(), password.to_string());
    user.delete_status = deleted;
    user
}

#[tokio::test]
async fn test_resolves_existing_user() {
    let users = users_with(vec![user("cook", "a@b", "H", false)]).await;
    let resolver = IdentityResolver::new(users);

    let principal = resolver.load_user_by_username("a@b").await.unwrap();

    assert_eq!(principal.login_name, "a@b");
    assert_eq!(principal.secret, "H");
    assert_eq!(principal.roles.len(), 1);
    assert!(principal.has_role(ROLE_USER));
}

#[tokio::test]
async fn test_unknown_login_fails() {
    let users = users_with(vec![user("cook", "a@b", "H", false)]).await;
    let resolver = IdentityResolver::new(users);

    let err = resolver.load_user_by_username("nobody@x").await.unwrap_err();

    assert!(matches!(&err, AppError::UnknownUser(login) if login == "nobody@x"));
}

#[tokio::test]
async fn test_deleted_user_follows_policy() {
    let users = users_with(vec![user("ghost", "x@y", "H", true)]).await;

    let allow = IdentityResolver::new(users.clone());
    assert_eq!(allow.deleted_policy(), DeletedUserPolicy::Allow);
    assert_eq!(
        allow.load_user_by_username("x@y").await.unwrap().login_name,
        "x@y"
    );

    let reject = IdentityResolver::new(users).with_deleted_policy(DeletedUserPolicy::Reject);
    assert!(matches!(
        reject.load_user_by_username("x@y").await,
        Err(AppError::UnknownUser(_))
    ));
}

#[tokio::test]
async fn test_authenticate_against_stored_hash() {
    let hash = Password::new("s3cret-pass").unwrap().into_string();
    let users = users_with(vec![user("cook", "a@b", &hash, false)]).await;
    let resolver = IdentityResolver::new(users);

    let principal = resolver.authenticate("a@b", "s3cret-pass").await.unwrap();
    assert_eq!(principal.login_name, "a@b");

    assert!(matches!(
        resolver.authenticate("a@b", "wrong-pass").await,
        Err(AppError::InvalidCredentials)
    ));
    assert!(matches!(
        resolver.authenticate("nobody@x", "s3cret-pass").await,
        Err(AppError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_build_resolver_leaves_schema_untouched() {
    let config = AuthServiceConfig {
        database: DatabaseConfig::in_memory(),
        reject_deleted_users: true,
    };
    let resolver = build_resolver(&config).await.unwrap();
    assert_eq!(resolver.deleted_policy(), DeletedUserPolicy::Reject);

    // No migrations ran, so the users table does not exist
    let err = resolver.load_user_by_username("a@b").await.unwrap_err();
    assert!(err.is_store_failure());
}
