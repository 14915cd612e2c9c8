//! Learning progress database entity for SeaORM.
//!
//! No deletion column: entries are archived instead.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::Collection;
use domain::LearningProgress;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "learning_progresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_archived: bool,
    pub satisfaction_level: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "learning_progresses";

    fn id_column() -> Column {
        Column::Id
    }
}

impl From<Model> for LearningProgress {
    fn from(model: Model) -> Self {
        LearningProgress {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            is_archived: model.is_archived,
            satisfaction_level: model.satisfaction_level,
            created_at: model.created_at,
        }
    }
}

impl From<LearningProgress> for ActiveModel {
    fn from(progress: LearningProgress) -> Self {
        ActiveModel {
            id: Set(progress.id),
            user_id: Set(progress.user_id),
            title: Set(progress.title),
            description: Set(progress.description),
            is_archived: Set(progress.is_archived),
            satisfaction_level: Set(progress.satisfaction_level),
            created_at: Set(progress.created_at),
        }
    }
}
