//! Identity resolver: login name to principal.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use common::{AppError, AppResult};
use domain::password::DUMMY_HASH;
use domain::{Password, Principal, SoftDelete};
use store_service_lib::repository::UserRepository;

/// How the resolver treats accounts whose `delete_status` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletedUserPolicy {
    /// Resolve soft-deleted users like any other
    #[default]
    Allow,
    /// Report soft-deleted users as unknown
    Reject,
}

/// Loads principals for the authentication layer.
#[async_trait]
pub trait UserDetailsService: Send + Sync {
    /// Resolve a login name (the user's email) into a principal.
    ///
    /// # Errors
    /// [`AppError::UnknownUser`] when no user has that email; store failures
    /// are propagated unchanged.
    async fn load_user_by_username(&self, username: &str) -> AppResult<Principal>;

    /// Resolve a login and check the candidate password against its secret.
    ///
    /// Unknown logins and wrong passwords both fail with
    /// [`AppError::InvalidCredentials`].
    async fn authenticate(&self, login: &str, password: &str) -> AppResult<Principal>;
}

/// [`UserDetailsService`] backed by the user repository's raw email lookup.
pub struct IdentityResolver {
    users: Arc<dyn UserRepository>,
    deleted_policy: DeletedUserPolicy,
}

impl IdentityResolver {
    /// Create a resolver that allows soft-deleted users
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            deleted_policy: DeletedUserPolicy::default(),
        }
    }

    pub fn with_deleted_policy(mut self, policy: DeletedUserPolicy) -> Self {
        self.deleted_policy = policy;
        self
    }

    pub fn deleted_policy(&self) -> DeletedUserPolicy {
        self.deleted_policy
    }
}

#[async_trait]
impl UserDetailsService for IdentityResolver {
    async fn load_user_by_username(&self, username: &str) -> AppResult<Principal> {
        debug!(login = username, "resolving principal");

        let user = self
            .users
            .find_by_email(username)
            .await?
            .ok_or_else(|| AppError::unknown_user(username))?;

        if self.deleted_policy == DeletedUserPolicy::Reject && user.is_deleted() {
            debug!(login = username, "rejecting soft-deleted user");
            return Err(AppError::unknown_user(username));
        }

        Ok(Principal::from(user))
    }

    async fn authenticate(&self, login: &str, password: &str) -> AppResult<Principal> {
        let principal = match self.load_user_by_username(login).await {
            Ok(principal) => principal,
            Err(AppError::UnknownUser(_)) => {
                // Same hashing cost as a known login
                Password::from_hash(DUMMY_HASH).verify(password);
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !principal.verify_secret(password) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{User, ROLE_USER};
    use mockall::predicate::*;
    use std::collections::BTreeSet;
    use store_service_lib::repository::MockUserRepository;

    fn stored_user(email: &str, password: &str, deleted: bool) -> User {
        let mut user = User::new("cook".to_string(), email.to_string(), password.to_string());
        user.id = "u1".to_string();
        user.delete_status = deleted;
        user
    }

    fn resolver_with(repo: MockUserRepository) -> IdentityResolver {
        IdentityResolver::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_load_existing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("a@b"))
            .times(1)
            .returning(|_| Ok(Some(stored_user("a@b", "H", false))));

        let principal = resolver_with(repo)
            .load_user_by_username("a@b")
            .await
            .unwrap();

        assert_eq!(principal.login_name, "a@b");
        assert_eq!(principal.secret, "H");
        assert_eq!(principal.roles, BTreeSet::from([ROLE_USER.to_string()]));
    }

    #[tokio::test]
    async fn test_load_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("nobody@x"))
            .returning(|_| Ok(None));

        let err = resolver_with(repo)
            .load_user_by_username("nobody@x")
            .await
            .unwrap_err();

        assert!(matches!(&err, AppError::UnknownUser(login) if login == "nobody@x"));
        assert_eq!(err.to_string(), "User not found with username: nobody@x");
    }

    #[tokio::test]
    async fn test_deleted_user_resolves_by_default() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("x@y", "H", true))));

        let principal = resolver_with(repo)
            .load_user_by_username("x@y")
            .await
            .unwrap();

        assert_eq!(principal.login_name, "x@y");
        assert!(principal.has_role(ROLE_USER));
    }

    #[tokio::test]
    async fn test_reject_policy_hides_deleted_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("x@y", "H", true))));

        let resolver = resolver_with(repo).with_deleted_policy(DeletedUserPolicy::Reject);
        let err = resolver.load_user_by_username("x@y").await.unwrap_err();

        assert!(matches!(err, AppError::UnknownUser(_)));
    }

    #[tokio::test]
    async fn test_reject_policy_keeps_live_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("a@b", "H", false))));

        let resolver = resolver_with(repo).with_deleted_policy(DeletedUserPolicy::Reject);
        assert!(resolver.load_user_by_username("a@b").await.is_ok());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::internal("connection reset")));

        let err = resolver_with(repo)
            .load_user_by_username("a@b")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_authenticate_with_correct_password() {
        let hash = Password::new("correct-horse").unwrap().into_string();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(stored_user("a@b", &hash, false))));

        let principal = resolver_with(repo)
            .authenticate("a@b", "correct-horse")
            .await
            .unwrap();

        assert_eq!(principal.login_name, "a@b");
    }

    #[tokio::test]
    async fn test_authenticate_with_wrong_password() {
        let hash = Password::new("correct-horse").unwrap().into_string();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(stored_user("a@b", &hash, false))));

        let err = resolver_with(repo)
            .authenticate("a@b", "battery-staple")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_login() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let err = resolver_with(repo)
            .authenticate("nobody@x", "whatever-pass")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }
}
