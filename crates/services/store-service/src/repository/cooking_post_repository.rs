//! Cooking post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all, fetch_one, soft_delete, SoftDeleteCollection};
use super::entities::cooking_post::{self, ActiveModel, Entity as CookingPostEntity};
use common::AppResult;
use domain::CookingPost;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Cooking post lookups. All of them exclude soft-deleted posts.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CookingPostRepository: Send + Sync {
    /// List all live posts
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<CookingPost>>;

    /// List live posts created by a user
    async fn find_by_created_by_id_and_delete_status_false(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<CookingPost>>;

    /// Find live post by ID
    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<CookingPost>>;

    /// Persist a new post
    async fn save(&self, post: CookingPost) -> AppResult<CookingPost>;

    /// Soft delete a live post
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// SeaORM-backed cooking post repository
#[derive(Clone)]
pub struct CookingPostStore {
    db: DatabaseConnection,
}

impl CookingPostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CookingPostRepository for CookingPostStore {
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<CookingPost>> {
        debug!("listing live cooking posts");
        fetch_all(CookingPostEntity::find_live(), &self.db).await
    }

    async fn find_by_created_by_id_and_delete_status_false(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<CookingPost>> {
        debug!(user_id, "live cooking posts by creator");
        let query =
            CookingPostEntity::find_live().filter(cooking_post::Column::CreatedById.eq(user_id));
        fetch_all(query, &self.db).await
    }

    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<CookingPost>> {
        debug!(id, "live cooking post lookup by id");
        fetch_one(CookingPostEntity::find_live_by_id(id), &self.db).await
    }

    async fn save(&self, mut post: CookingPost) -> AppResult<CookingPost> {
        assign_id(&mut post.id);
        let model = ActiveModel::from(post).insert(&self.db).await?;
        Ok(CookingPost::from(model))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        soft_delete::<CookingPostEntity, _>(&self.db, id).await
    }
}
