use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_business_table::Business,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusinessClient::Table)
                    .if_not_exists()
                    .col(integer(BusinessClient::BusinessId))
                    .col(integer(BusinessClient::ClientId))
                    .col(
                        timestamp_with_time_zone(BusinessClient::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_business_client")
                            .col(BusinessClient::BusinessId)
                            .col(BusinessClient::ClientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_client_business_id")
                            .from(BusinessClient::Table, BusinessClient::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_client_client_id")
                            .from(BusinessClient::Table, BusinessClient::ClientId)
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
            .drop_table(Table::drop().table(BusinessClient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusinessClient {
    Table,
    BusinessId,
    ClientId,
    CreatedAt,
}
