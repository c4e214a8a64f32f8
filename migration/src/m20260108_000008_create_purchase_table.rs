use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260108_000007_create_reward_table::Reward,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Purchase::Table)
                    .if_not_exists()
                    .col(pk_auto(Purchase::Id))
                    .col(integer(Purchase::UserId))
                    .col(integer(Purchase::RewardId))
                    .col(integer(Purchase::Cost))
                    .col(string(Purchase::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Purchase::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Purchase::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_user_id")
                            .from(Purchase::Table, Purchase::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_reward_id")
                            .from(Purchase::Table, Purchase::RewardId)
                            .to(Reward::Table, Reward::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Purchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Purchase {
    Table,
    Id,
    UserId,
    RewardId,
    Cost,
    Status,
    CreatedAt,
    ResolvedAt,
}
