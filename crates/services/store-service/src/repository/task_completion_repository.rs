//! Task completion repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all, fetch_one, soft_delete, SoftDeleteCollection};
use super::entities::task_completion::{self, ActiveModel, Entity as TaskCompletionEntity};
use common::AppResult;
use domain::TaskCompletion;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Task completion lookups. All of them exclude soft-deleted completions.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TaskCompletionRepository: Send + Sync {
    /// List live completions by a user
    async fn find_by_completed_by_id_and_delete_status_false(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<TaskCompletion>>;

    /// List live completions of a task
    async fn find_by_task_id_and_delete_status_false(
        &self,
        task_id: &str,
    ) -> AppResult<Vec<TaskCompletion>>;

    /// List all live completions
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<TaskCompletion>>;

    /// Find live completion by ID
    async fn find_by_id_and_delete_status_false(
        &self,
        id: &str,
    ) -> AppResult<Option<TaskCompletion>>;

    /// Find the live completion of a task by a given user
    async fn find_by_task_id_and_completed_by_id_and_delete_status_false(
        &self,
        task_id: &str,
        user_id: &str,
    ) -> AppResult<Option<TaskCompletion>>;

    /// Persist a new completion, assigning an id when it has none
    async fn save(&self, completion: TaskCompletion) -> AppResult<TaskCompletion>;

    /// Soft delete a live completion. Returns false if no live completion had that id.
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// SeaORM-backed [`TaskCompletionRepository`]
#[derive(Clone)]
pub struct TaskCompletionStore {
    db: DatabaseConnection,
}

impl TaskCompletionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskCompletionRepository for TaskCompletionStore {
    async fn find_by_completed_by_id_and_delete_status_false(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<TaskCompletion>> {
        debug!(user_id, "live completions by user");
        let query = TaskCompletionEntity::find_live()
            .filter(task_completion::Column::CompletedById.eq(user_id));
        fetch_all(query, &self.db).await
    }

    async fn find_by_task_id_and_delete_status_false(
        &self,
        task_id: &str,
    ) -> AppResult<Vec<TaskCompletion>> {
        debug!(task_id, "live completions of task");
        let query =
            TaskCompletionEntity::find_live().filter(task_completion::Column::TaskId.eq(task_id));
        fetch_all(query, &self.db).await
    }

    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<TaskCompletion>> {
        debug!("listing live completions");
        fetch_all(TaskCompletionEntity::find_live(), &self.db).await
    }

    async fn find_by_id_and_delete_status_false(
        &self,
        id: &str,
    ) -> AppResult<Option<TaskCompletion>> {
        debug!(id, "live completion lookup by id");
        fetch_one(TaskCompletionEntity::find_live_by_id(id), &self.db).await
    }

    async fn find_by_task_id_and_completed_by_id_and_delete_status_false(
        &self,
        task_id: &str,
        user_id: &str,
    ) -> AppResult<Option<TaskCompletion>> {
        debug!(task_id, user_id, "live completion lookup");
        let query = TaskCompletionEntity::find_live()
            .filter(task_completion::Column::TaskId.eq(task_id))
            .filter(task_completion::Column::CompletedById.eq(user_id));
        fetch_one(query, &self.db).await
    }

    async fn save(&self, mut completion: TaskCompletion) -> AppResult<TaskCompletion> {
        assign_id(&mut completion.id);
        let model = ActiveModel::from(completion).insert(&self.db).await?;
        Ok(TaskCompletion::from(model))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        soft_delete::<TaskCompletionEntity, _>(&self.db, id).await
    }
}
