use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeeklyReport::Table)
                    .if_not_exists()
                    .col(pk_auto(WeeklyReport::Id))
                    .col(integer(WeeklyReport::UserId))
                    .col(date(WeeklyReport::WeekStart))
                    .col(text(WeeklyReport::Summary))
                    .col(text_null(WeeklyReport::Plans))
                    .col(text_null(WeeklyReport::Blockers))
                    .col(string(WeeklyReport::Status).default("submitted"))
                    .col(integer_null(WeeklyReport::ReviewerId))
                    .col(text_null(WeeklyReport::Feedback))
                    .col(timestamp_with_time_zone_null(WeeklyReport::ReviewedAt))
                    .col(
                        timestamp_with_time_zone(WeeklyReport::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(WeeklyReport::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_report_user_id")
                            .from(WeeklyReport::Table, WeeklyReport::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_report_reviewer_id")
                            .from(WeeklyReport::Table, WeeklyReport::ReviewerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_weekly_report_user_week")
                    .table(WeeklyReport::Table)
                    .col(WeeklyReport::UserId)
                    .col(WeeklyReport::WeekStart)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeeklyReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WeeklyReport {
    Table,
    Id,
    UserId,
    WeekStart,
    Summary,
    Plans,
    Blockers,
    Status,
    ReviewerId,
    Feedback,
    ReviewedAt,
    CreatedAt,
    UpdatedAt,
}
