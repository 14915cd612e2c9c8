//! Notification repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter};
use tracing::debug;

use super::base::{assign_id, fetch_all, fetch_one, soft_delete, SoftDeleteCollection};
use super::entities::notification::{self, ActiveModel, Entity as NotificationEntity};
use common::AppResult;
use domain::Notification;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Notification lookups. All of them exclude soft-deleted notifications.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// List live notifications addressed to a user
    async fn find_by_receiver_id_and_delete_status_false(
        &self,
        receiver_id: &str,
    ) -> AppResult<Vec<Notification>>;

    /// List all live notifications
    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Notification>>;

    /// Find live notification by ID
    async fn find_by_id_and_delete_status_false(&self, id: &str)
        -> AppResult<Option<Notification>>;

    /// Persist a new notification, assigning an id when it has none
    async fn save(&self, notification: Notification) -> AppResult<Notification>;

    /// Soft delete a live notification. Returns false if no live notification had that id.
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// SeaORM-backed [`NotificationRepository`]
#[derive(Clone)]
pub struct NotificationStore {
    db: DatabaseConnection,
}

impl NotificationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn find_by_receiver_id_and_delete_status_false(
        &self,
        receiver_id: &str,
    ) -> AppResult<Vec<Notification>> {
        debug!(receiver_id, "live notifications for receiver");
        let query = NotificationEntity::find_live()
            .filter(notification::Column::ReceiverId.eq(receiver_id));
        fetch_all(query, &self.db).await
    }

    async fn find_all_by_delete_status_false(&self) -> AppResult<Vec<Notification>> {
        debug!("listing live notifications");
        fetch_all(NotificationEntity::find_live(), &self.db).await
    }

    async fn find_by_id_and_delete_status_false(
        &self,
        id: &str,
    ) -> AppResult<Option<Notification>> {
        debug!(id, "live notification lookup by id");
        fetch_one(NotificationEntity::find_live_by_id(id), &self.db).await
    }

    async fn save(&self, mut notification: Notification) -> AppResult<Notification> {
        assign_id(&mut notification.id);
        let model = ActiveModel::from(notification).insert(&self.db).await?;
        Ok(Notification::from(model))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        soft_delete::<NotificationEntity, _>(&self.db, id).await
    }
}
