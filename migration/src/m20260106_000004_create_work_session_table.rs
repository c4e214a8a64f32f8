use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260105_000003_create_task_table::Task};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkSession::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkSession::Id))
                    .col(integer(WorkSession::UserId))
                    .col(integer_null(WorkSession::TaskId))
                    .col(timestamp_with_time_zone(WorkSession::StartedAt))
                    .col(timestamp_with_time_zone_null(WorkSession::EndedAt))
                    .col(big_integer_null(WorkSession::DurationSeconds))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_session_user_id")
                            .from(WorkSession::Table, WorkSession::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_session_task_id")
                            .from(WorkSession::Table, WorkSession::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_work_session_user_ended")
                    .table(WorkSession::Table)
                    .col(WorkSession::UserId)
                    .col(WorkSession::EndedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkSession {
    Table,
    Id,
    UserId,
    TaskId,
    StartedAt,
    EndedAt,
    DurationSeconds,
}
