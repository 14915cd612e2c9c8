//! Comment database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::{Collection, SoftDeleteCollection};
use domain::Comment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Id of the post commented on
    pub commented_on_id: String,
    /// Id of the commenting user
    pub commented_by_id: String,
    pub created_at: DateTimeUtc,
    pub delete_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "comments";

    fn id_column() -> Column {
        Column::Id
    }
}

impl SoftDeleteCollection for Entity {
    fn delete_status_column() -> Column {
        Column::DeleteStatus
    }
}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            commented_on_id: model.commented_on_id,
            commented_by_id: model.commented_by_id,
            created_at: model.created_at,
            delete_status: model.delete_status,
        }
    }
}

impl From<Comment> for ActiveModel {
    fn from(comment: Comment) -> Self {
        ActiveModel {
            id: Set(comment.id),
            content: Set(comment.content),
            commented_on_id: Set(comment.commented_on_id),
            commented_by_id: Set(comment.commented_by_id),
            created_at: Set(comment.created_at),
            delete_status: Set(comment.delete_status),
        }
    }
}
