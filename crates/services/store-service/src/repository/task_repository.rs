//! Task repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all, fetch_one, soft_delete, SoftDeleteCollection};
use super::entities::task::{self, ActiveModel, Entity as TaskEntity};
use common::AppResult;
use domain::Task;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Task lookups. All of them exclude soft-deleted tasks.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all live tasks
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Task>>;

    /// Find live task by ID
    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<Task>>;

    /// List live tasks of a given type
    async fn find_by_type_and_delete_status_false(&self, task_type: &str) -> AppResult<Vec<Task>>;

    /// Persist a new task, assigning an id when it has none
    async fn save(&self, task: Task) -> AppResult<Task>;

    /// Soft delete a live task. Returns false if no live task had that id.
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// SeaORM-backed [`TaskRepository`]
#[derive(Clone)]
pub struct TaskStore {
    db: DatabaseConnection,
}

impl TaskStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Task>> {
        debug!("listing live tasks");
        fetch_all(TaskEntity::find_live(), &self.db).await
    }

    async fn find_by_id_and_delete_status_false(&self, id: &str) -> AppResult<Option<Task>> {
        debug!(id, "live task lookup by id");
        fetch_one(TaskEntity::find_live_by_id(id), &self.db).await
    }

    async fn find_by_type_and_delete_status_false(&self, task_type: &str) -> AppResult<Vec<Task>> {
        debug!(task_type, "live tasks by type");
        let query = TaskEntity::find_live().filter(task::Column::TaskType.eq(task_type));
        fetch_all(query, &self.db).await
    }

    async fn save(&self, mut task: Task) -> AppResult<Task> {
        assign_id(&mut task.id);
        let model = ActiveModel::from(task).insert(&self.db).await?;
        Ok(Task::from(model))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        soft_delete::<TaskEntity, _>(&self.db, id).await
    }
}
