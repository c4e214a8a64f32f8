use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260110_000012_create_badge_table::Badge,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBadge::Table)
                    .if_not_exists()
                    .col(integer(UserBadge::UserId))
                    .col(integer(UserBadge::BadgeId))
                    .col(integer_null(UserBadge::AwardedBy))
                    .col(
                        timestamp_with_time_zone(UserBadge::AwardedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserBadge::UserId)
                            .col(UserBadge::BadgeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badge_user_id")
                            .from(UserBadge::Table, UserBadge::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badge_badge_id")
                            .from(UserBadge::Table, UserBadge::BadgeId)
                            .to(Badge::Table, Badge::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBadge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBadge {
    Table,
    UserId,
    BadgeId,
    AwardedBy,
    AwardedAt,
}
