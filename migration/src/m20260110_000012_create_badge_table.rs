use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badge::Table)
                    .if_not_exists()
                    .col(pk_auto(Badge::Id))
                    .col(string_uniq(Badge::Name))
                    .col(text(Badge::Description).default(""))
                    .col(string_null(Badge::Icon))
                    .col(
                        timestamp_with_time_zone(Badge::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Badge {
    Table,
    Id,
    Name,
    Description,
    Icon,
    CreatedAt,
}
