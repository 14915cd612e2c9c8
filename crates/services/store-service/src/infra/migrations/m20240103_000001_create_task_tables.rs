//! Migration: Create tasks and task completions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tasks::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Tasks::Title).string().not_null())
                    .col(ColumnDef::new(Tasks::Description).text().not_null())
                    .col(ColumnDef::new(Tasks::Type).string().not_null())
                    .col(
                        ColumnDef::new(Tasks::DeleteStatus)
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
                    .table(TaskCompletions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaskCompletions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TaskCompletions::TaskId).string().not_null())
                    .col(ColumnDef::new(TaskCompletions::CompletedById).string().not_null())
                    .col(
                        ColumnDef::new(TaskCompletions::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaskCompletions::DeleteStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_type")
                    .table(Tasks::Table)
                    .col(Tasks::Type)
                    .col(Tasks::DeleteStatus)
                    .to_owned(),
            )
            .await?;

        // Covers the (task, completer) compound lookup as well as by-task scans
        manager
            .create_index(
                Index::create()
                    .name("idx_task_completions_task_user")
                    .table(TaskCompletions::Table)
                    .col(TaskCompletions::TaskId)
                    .col(TaskCompletions::CompletedById)
                    .col(TaskCompletions::DeleteStatus)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_task_completions_user")
                    .table(TaskCompletions::Table)
                    .col(TaskCompletions::CompletedById)
                    .col(TaskCompletions::DeleteStatus)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskCompletions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Tasks {
    Table,
    Id,
    Title,
    Description,
    Type,
    DeleteStatus,
}

#[derive(Iden)]
enum TaskCompletions {
    Table,
    Id,
    TaskId,
    CompletedById,
    CompletedAt,
    DeleteStatus,
}
