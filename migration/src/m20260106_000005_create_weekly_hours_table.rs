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
                    .table(WeeklyHours::Table)
                    .if_not_exists()
                    .col(integer(WeeklyHours::UserId))
                    .col(date(WeeklyHours::WeekStart))
                    .col(big_integer(WeeklyHours::Seconds).default(0))
                    .col(
                        timestamp_with_time_zone(WeeklyHours::ArchivedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WeeklyHours::UserId)
                            .col(WeeklyHours::WeekStart),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_hours_user_id")
                            .from(WeeklyHours::Table, WeeklyHours::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeeklyHours::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WeeklyHours {
    Table,
    UserId,
    WeekStart,
    Seconds,
    ArchivedAt,
}
