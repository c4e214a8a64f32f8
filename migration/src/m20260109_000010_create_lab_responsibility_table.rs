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
                    .table(LabResponsibility::Table)
                    .if_not_exists()
                    .col(pk_auto(LabResponsibility::Id))
                    .col(integer(LabResponsibility::UserId))
                    .col(timestamp_with_time_zone(LabResponsibility::StartsAt))
                    .col(timestamp_with_time_zone(LabResponsibility::EndsAt))
                    .col(text_null(LabResponsibility::Note))
                    .col(integer_null(LabResponsibility::AssignedBy))
                    .col(
                        timestamp_with_time_zone(LabResponsibility::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lab_responsibility_user_id")
                            .from(LabResponsibility::Table, LabResponsibility::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lab_responsibility_assigned_by")
                            .from(LabResponsibility::Table, LabResponsibility::AssignedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LabResponsibility::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LabResponsibility {
    Table,
    Id,
    UserId,
    StartsAt,
    EndsAt,
    Note,
    AssignedBy,
    CreatedAt,
}
