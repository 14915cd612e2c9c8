//! User repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all, fetch_one, soft_delete, SoftDeleteCollection};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups named `*_and_delete_status_false` only see live users. The two raw
/// lookups, [`find_by_username`](UserRepository::find_by_username) and
/// [`find_by_email`](UserRepository::find_by_email), also return soft-deleted
/// users so authentication can tell a missing account from a deleted one.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find live user by email
    async fn find_by_email_and_delete_status_false(&self, email: &str) -> AppResult<Option<User>>;

    /// List all live users
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<User>>;

    /// Find live user by ID
    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<User>>;

    /// Find user by username, including soft-deleted
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find user by email, including soft-deleted
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new user, assigning an id when it has none
    async fn save(&self, user: User) -> AppResult<User>;

    /// Soft delete a live user. Returns false if no live user had that id.
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository with soft delete
#[derive(Clone)]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email_and_delete_status_false(&self, email: &str) -> AppResult<Option<User>> {
        debug!(email, "live user lookup by email");
        let query = UserEntity::find_live().filter(user::Column::Email.eq(email));
        fetch_one(query, &self.db).await
    }

    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<User>> {
        debug!("listing live users");
        fetch_all(UserEntity::find_live(), &self.db).await
    }

    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<User>> {
        debug!(id, "live user lookup by id");
        fetch_one(UserEntity::find_live_by_id(id), &self.db).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        debug!(username, "raw user lookup by username");
        let query = UserEntity::find().filter(user::Column::Username.eq(username));
        fetch_one(query, &self.db).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        debug!(email, "raw user lookup by email");
        let query = UserEntity::find().filter(user::Column::Email.eq(email));
        fetch_one(query, &self.db).await
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        assign_id(&mut user.id);
        let model = ActiveModel::from(user).insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        soft_delete::<UserEntity, _>(&self.db, id).await
    }
}
