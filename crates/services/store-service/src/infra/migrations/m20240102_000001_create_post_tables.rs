//! Migration: Create cooking posts, comments, media and notifications.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CookingPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CookingPosts::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(CookingPosts::Title).string().not_null())
                    .col(ColumnDef::new(CookingPosts::Description).text().not_null())
                    .col(ColumnDef::new(CookingPosts::CreatedById).string().not_null())
                    .col(
                        ColumnDef::new(CookingPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CookingPosts::DeleteStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Comments::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(ColumnDef::new(Comments::CommentedOnId).string().not_null())
                    .col(ColumnDef::new(Comments::CommentedById).string().not_null())
                    .col(
                        ColumnDef::new(Comments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comments::DeleteStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Media::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Media::Url).string().not_null())
                    .col(ColumnDef::new(Media::MediaType).string().not_null())
                    .col(ColumnDef::new(Media::RelatedPostId).string().not_null())
                    .col(
                        ColumnDef::new(Media::DeleteStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Notifications::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::ReceiverId).string().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::DeleteStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup indexes for the relational fields queried by the repositories
        manager
            .create_index(
                Index::create()
                    .name("idx_cooking_posts_created_by")
                    .table(CookingPosts::Table)
                    .col(CookingPosts::CreatedById)
                    .col(CookingPosts::DeleteStatus)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_comments_commented_on")
                    .table(Comments::Table)
                    .col(Comments::CommentedOnId)
                    .col(Comments::DeleteStatus)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_comments_commented_by")
                    .table(Comments::Table)
                    .col(Comments::CommentedById)
                    .col(Comments::DeleteStatus)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_media_related_post")
                    .table(Media::Table)
                    .col(Media::RelatedPostId)
                    .col(Media::DeleteStatus)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_receiver")
                    .table(Notifications::Table)
                    .col(Notifications::ReceiverId)
                    .col(Notifications::DeleteStatus)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CookingPosts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CookingPosts {
    Table,
    Id,
    Title,
    Description,
    CreatedById,
    CreatedAt,
    DeleteStatus,
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    Content,
    CommentedOnId,
    CommentedById,
    CreatedAt,
    DeleteStatus,
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
    Url,
    MediaType,
    RelatedPostId,
    DeleteStatus,
}

#[derive(Iden)]
enum Notifications {
    Table,
    Id,
    Message,
    ReceiverId,
    IsRead,
    CreatedAt,
    DeleteStatus,
}
