//! Learning progress repository.
//!
//! Progress entries are never soft deleted, so none of these lookups filter
//! on a deletion flag.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all};
use super::entities::learning_progress::{self, ActiveModel, Entity as LearningProgressEntity};
use common::AppResult;
use domain::LearningProgress;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LearningProgressRepository: Send + Sync {
    /// List every progress entry of a user
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<LearningProgress>>;

    /// List a user's progress entries with the given archived flag
    async fn find_by_user_and_is_archived(
        &self,
        user_id: &str,
        is_archived: bool,
    ) -> AppResult<Vec<LearningProgress>>;

    /// Persist a new entry, assigning an id when it has none.
    /// Fails with a validation error when the satisfaction level is out of range.
    async fn save(&self, progress: LearningProgress) -> AppResult<LearningProgress>;
}

/// SeaORM-backed [`LearningProgressRepository`]
#[derive(Clone)]
pub struct LearningProgressStore {
    db: DatabaseConnection,
}

impl LearningProgressStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LearningProgressRepository for LearningProgressStore {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<LearningProgress>> {
        debug!(user_id, "learning progress by user");
        let query = LearningProgressEntity::find()
            .filter(learning_progress::Column::UserId.eq(user_id));
        fetch_all(query, &self.db).await
    }

    async fn find_by_user_and_is_archived(
        &self,
        user_id: &str,
        is_archived: bool,
    ) -> AppResult<Vec<LearningProgress>> {
        debug!(user_id, is_archived, "learning progress by user and archived flag");
        let query = LearningProgressEntity::find()
            .filter(learning_progress::Column::UserId.eq(user_id))
            .filter(learning_progress::Column::IsArchived.eq(is_archived));
        fetch_all(query, &self.db).await
    }

    async fn save(&self, mut progress: LearningProgress) -> AppResult<LearningProgress> {
        progress.validate()?;
        assign_id(&mut progress.id);
        let model = ActiveModel::from(progress).insert(&self.db).await?;
        Ok(LearningProgress::from(model))
    }
}
