//! Migration: Create learning progresses and reports.
//!
//! Neither table has a deletion flag.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LearningProgresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LearningProgresses::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LearningProgresses::UserId).string().not_null())
                    .col(ColumnDef::new(LearningProgresses::Title).string().not_null())
                    .col(ColumnDef::new(LearningProgresses::Description).text().not_null())
                    .col(
                        ColumnDef::new(LearningProgresses::IsArchived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LearningProgresses::SatisfactionLevel)
                            .integer()
                            .not_null()
                            .default(3),
                    )
                    .col(
                        ColumnDef::new(LearningProgresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Reports::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Reports::ReportType).string_len(16).not_null())
                    .col(ColumnDef::new(Reports::ReportedContentId).string().not_null())
                    .col(ColumnDef::new(Reports::Reason).text().not_null())
                    .col(ColumnDef::new(Reports::ContentOwnerId).string().not_null())
                    .col(ColumnDef::new(Reports::ReportedById).string().not_null())
                    .col(
                        ColumnDef::new(Reports::Resolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reports::ReportedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_learning_progresses_user")
                    .table(LearningProgresses::Table)
                    .col(LearningProgresses::UserId)
                    .col(LearningProgresses::IsArchived)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_reports_type")
                    .table(Reports::Table)
                    .col(Reports::ReportType)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_reports_content_owner")
                    .table(Reports::Table)
                    .col(Reports::ContentOwnerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_reports_reported_by")
                    .table(Reports::Table)
                    .col(Reports::ReportedById)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LearningProgresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LearningProgresses {
    Table,
    Id,
    UserId,
    Title,
    Description,
    IsArchived,
    SatisfactionLevel,
    CreatedAt,
}

#[derive(Iden)]
enum Reports {
    Table,
    Id,
    ReportType,
    ReportedContentId,
    Reason,
    ContentOwnerId,
    ReportedById,
    Resolved,
    ReportedAt,
}
