//! Media repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all, fetch_one, soft_delete, SoftDeleteCollection};
use super::entities::media::{self, ActiveModel, Entity as MediaEntity};
use common::AppResult;
use domain::Media;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// List live media attached to a post
    async fn find_by_related_post_id_and_delete_status_false(
        &self,
        post_id: &str,
    ) -> AppResult<Vec<Media>>;

    /// List all live media
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Media>>;

    /// Find live media by ID
    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<Media>>;

    /// Persist a new media item, assigning an id when it has none
    async fn save(&self, media: Media) -> AppResult<Media>;

    /// Soft delete a live media item. Returns false if no live media item had that id.
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// SeaORM-backed [`MediaRepository`]
#[derive(Clone)]
pub struct MediaStore {
    db: DatabaseConnection,
}

impl MediaStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaRepository for MediaStore {
    async fn find_by_related_post_id_and_delete_status_false(
        &self,
        post_id: &str,
    ) -> AppResult<Vec<Media>> {
        debug!(post_id, "live media of post");
        let query = MediaEntity::find_live().filter(media::Column::RelatedPostId.eq(post_id));
        fetch_all(query, &self.db).await
    }

    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Media>> {
        debug!("listing live media");
        fetch_all(MediaEntity::find_live(), &self.db).await
    }

    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<Media>> {
        debug!(id, "live media lookup by id");
        fetch_one(MediaEntity::find_live_by_id(id), &self.db).await
    }

    async fn save(&self, mut media: Media) -> AppResult<Media> {
        assign_id(&mut media.id);
        let model = ActiveModel::from(media).insert(&self.db).await?;
        Ok(Media::from(model))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        soft_delete::<MediaEntity, _>(&self.db, id).await
    }
}
