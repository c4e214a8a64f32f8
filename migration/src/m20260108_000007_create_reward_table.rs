use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reward::Table)
                    .if_not_exists()
                    .col(pk_auto(Reward::Id))
                    .col(string(Reward::Name))
                    .col(text(Reward::Description).default(""))
                    .col(integer(Reward::Cost))
                    .col(integer_null(Reward::Stock))
                    .col(boolean(Reward::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Reward::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reward {
    Table,
    Id,
    Name,
    Description,
    Cost,
    Stock,
    Active,
    CreatedAt,
}
