//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::{Collection, SoftDeleteCollection};
use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Stored password hash
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTimeUtc,
    /// Soft delete flag (false = live, true = deleted)
    pub delete_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "users";

    fn id_column() -> Column {
        Column::Id
    }
}

impl SoftDeleteCollection for Entity {
    fn delete_status_column() -> Column {
        Column::DeleteStatus
    }
}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password: model.password,
            first_name: model.first_name,
            last_name: model.last_name,
            created_at: model.created_at,
            delete_status: model.delete_status,
        }
    }
}

impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            password: Set(user.password),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            created_at: Set(user.created_at),
            delete_status: Set(user.delete_status),
        }
    }
}
