//! Cooking post database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::{Collection, SoftDeleteCollection};
use domain::CookingPost;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cooking_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Id of the creating user
    pub created_by_id: String,
    pub created_at: DateTimeUtc,
    pub delete_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "cooking_posts";

    fn id_column() -> Column {
        Column::Id
    }
}

impl SoftDeleteCollection for Entity {
    fn delete_status_column() -> Column {
        Column::DeleteStatus
    }
}

impl From<Model> for CookingPost {
    fn from(model: Model) -> Self {
        CookingPost {
            id: model.id,
            title: model.title,
            description: model.description,
            created_by_id: model.created_by_id,
            created_at: model.created_at,
            delete_status: model.delete_status,
        }
    }
}

impl From<CookingPost> for ActiveModel {
    fn from(post: CookingPost) -> Self {
        ActiveModel {
            id: Set(post.id),
            title: Set(post.title),
            description: Set(post.description),
            created_by_id: Set(post.created_by_id),
            created_at: Set(post.created_at),
            delete_status: Set(post.delete_status),
        }
    }
}
