use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_business_table::Business,
    m20250301_000003_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::ClientId))
                    .col(integer(Booking::WorkerId))
                    .col(integer(Booking::ServiceId))
                    .col(integer(Booking::BusinessId))
                    .col(timestamp_with_time_zone(Booking::StartTime))
                    .col(timestamp_with_time_zone(Booking::EndTime))
                    .col(string(Booking::Status))
                    .col(boolean(Booking::IsPaid).default(false))
                    .col(text_null(Booking::Notes))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_client_id")
                            .from(Booking::Table, Booking::ClientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_worker_id")
                            .from(Booking::Table, Booking::WorkerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_id")
                            .from(Booking::Table, Booking::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_business_id")
                            .from(Booking::Table, Booking::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap checks filter by worker and time range
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_worker_time")
                    .table(Booking::Table)
                    .col(Booking::WorkerId)
                    .col(Booking::StartTime)
                    .col(Booking::EndTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    ClientId,
    WorkerId,
    ServiceId,
    BusinessId,
    StartTime,
    EndTime,
    Status,
    IsPaid,
    Notes,
    CreatedAt,
    UpdatedAt,
}
