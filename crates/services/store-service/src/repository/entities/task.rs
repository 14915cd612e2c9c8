//! Task database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::{Collection, SoftDeleteCollection};
use domain::Task;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Task discriminator
    #[sea_orm(column_name = "type")]
    pub task_type: String,
    pub delete_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "tasks";

    fn id_column() -> Column {
        Column::Id
    }
}

impl SoftDeleteCollection for Entity {
    fn delete_status_column() -> Column {
        Column::DeleteStatus
    }
}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Task {
            id: model.id,
            title: model.title,
            description: model.description,
            task_type: model.task_type,
            delete_status: model.delete_status,
        }
    }
}

impl From<Task> for ActiveModel {
    fn from(task: Task) -> Self {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            task_type: Set(task.task_type),
            delete_status: Set(task.delete_status),
        }
    }
}
