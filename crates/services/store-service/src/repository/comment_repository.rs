//! Comment repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all, fetch_one, soft_delete, SoftDeleteCollection};
use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use common::AppResult;
use domain::Comment;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment lookups. All of them exclude soft-deleted comments.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List live comments on a post
    async fn find_by_commented_on_id_and_delete_status_false(
        &self,
        post_id: &str,
    ) -> AppResult<Vec<Comment>>;

    /// List all live comments
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Comment>>;

    /// Find live comment by ID
    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<Comment>>;

    /// List live comments written by a user
    async fn find_by_commented_by_id_and_delete_status_false(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<Comment>>;

    /// Persist a new comment
    async fn save(&self, comment: Comment) -> AppResult<Comment>;

    /// Soft delete a live comment
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// SeaORM-backed comment repository
#[derive(Clone)]
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn find_by_commented_on_id_and_delete_status_false(
        &self,
        post_id: &str,
    ) -> AppResult<Vec<Comment>> {
        debug!(post_id, "live comments on post");
        let query = CommentEntity::find_live().filter(comment::Column::CommentedOnId.eq(post_id));
        fetch_all(query, &self.db).await
    }

    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Comment>> {
        debug!("listing live comments");
        fetch_all(CommentEntity::find_live(), &self.db).await
    }

    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<Comment>> {
        debug!(id, "live comment lookup by id");
        fetch_one(CommentEntity::find_live_by_id(id), &self.db).await
    }

    async fn find_by_commented_by_id_and_delete_status_false(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<Comment>> {
        debug!(user_id, "live comments by author");
        let query = CommentEntity::find_live().filter(comment::Column::CommentedById.eq(user_id));
        fetch_all(query, &self.db).await
    }

    async fn save(&self, mut comment: Comment) -> AppResult<Comment> {
        assign_id(&mut comment.id);
        let model = ActiveModel::from(comment).insert(&self.db).await?;
        Ok(Comment::from(model))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        soft_delete::<CommentEntity, _>(&self.db, id).await
    }
}
