use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Business::Table)
                    .if_not_exists()
                    .col(pk_auto(Business::Id))
                    .col(integer(Business::OwnerId))
                    .col(string(Business::Name))
                    .col(string_null(Business::Description))
                    .col(string_null(Business::Address))
                    .col(string_null(Business::Phone))
                    .col(text(Business::Settings))
                    .col(
                        timestamp_with_time_zone(Business::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Business::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_owner_id")
                            .from(Business::Table, Business::OwnerId)
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
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Business {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Address,
    Phone,
    Settings,
    CreatedAt,
    UpdatedAt,
}
