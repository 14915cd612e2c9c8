//! Media database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::{Collection, SoftDeleteCollection};
use domain::Media;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub url: String,
    pub media_type: String,
    /// Id of the post the media belongs to
    pub related_post_id: String,
    pub delete_status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "media";

    fn id_column() -> Column {
        Column::Id
    }
}

impl SoftDeleteCollection for Entity {
    fn delete_status_column() -> Column {
        Column::DeleteStatus
    }
}

impl From<Model> for Media {
    fn from(model: Model) -> Self {
        Media {
            id: model.id,
            url: model.url,
            media_type: model.media_type,
            related_post_id: model.related_post_id,
            delete_status: model.delete_status,
        }
    }
}

impl From<Media> for ActiveModel {
    fn from(media: Media) -> Self {
        ActiveModel {
            id: Set(media.id),
            url: Set(media.url),
            media_type: Set(media.media_type),
            related_post_id: Set(media.related_post_id),
            delete_status: Set(media.delete_status),
        }
    }
}
