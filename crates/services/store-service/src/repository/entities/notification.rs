//! Notification database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::{Collection, SoftDeleteCollection};
use domain::Notification;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub receiver_id: String,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
    pub delete_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "notifications";

    fn id_column() -> Column {
        Column::Id
    }
}

impl SoftDeleteCollection for Entity {
    fn delete_status_column() -> Column {
        Column::DeleteStatus
    }
}

impl From<Model> for Notification {
    fn from(model: Model) -> Self {
        Notification {
            id: model.id,
            message: model.message,
            receiver_id: model.receiver_id,
            is_read: model.is_read,
            created_at: model.created_at,
            delete_status: model.delete_status,
        }
    }
}

impl From<Notification> for ActiveModel {
    fn from(notification: Notification) -> Self {
        ActiveModel {
            id: Set(notification.id),
            message: Set(notification.message),
            receiver_id: Set(notification.receiver_id),
            is_read: Set(notification.is_read),
            created_at: Set(notification.created_at),
            delete_status: Set(notification.delete_status),
        }
    }
}
