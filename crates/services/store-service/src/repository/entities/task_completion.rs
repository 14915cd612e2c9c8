//! Task completion database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::{Collection, SoftDeleteCollection};
use domain::TaskCompletion;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task_completions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub task_id: String,
    pub completed_by_id: String,
    pub completed_at: DateTimeUtc,
    pub delete_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "task_completions";

    fn id_column() -> Column {
        Column::Id
    }
}

impl SoftDeleteCollection for Entity {
    fn delete_status_column() -> Column {
        Column::DeleteStatus
    }
}

impl From<Model> for TaskCompletion {
    fn from(model: Model) -> Self {
        TaskCompletion {
            id: model.id,
            task_id: model.task_id,
            completed_by_id: model.completed_by_id,
            completed_at: model.completed_at,
            delete_status: model.delete_status,
        }
    }
}

impl From<TaskCompletion> for ActiveModel {
    fn from(completion: TaskCompletion) -> Self {
        ActiveModel {
            id: Set(completion.id),
            task_id: Set(completion.task_id),
            completed_by_id: Set(completion.completed_by_id),
            completed_at: Set(completion.completed_at),
            delete_status: Set(completion.delete_status),
        }
    }
}
