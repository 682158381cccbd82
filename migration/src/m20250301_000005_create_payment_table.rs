use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000004_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer_uniq(Payment::BookingId))
                    .col(big_integer(Payment::AmountCents))
                    .col(big_integer(Payment::PlatformFeeCents))
                    .col(big_integer(Payment::ProcessorFeeCents))
                    .col(big_integer(Payment::NetAmountCents))
                    .col(string(Payment::Currency))
                    .col(string(Payment::Status))
                    .col(string_null(Payment::ProcessorPaymentId).unique_key())
                    .col(
                        timestamp_with_time_zone(Payment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Payment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_booking_id")
                            .from(Payment::Table, Payment::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    BookingId,
    AmountCents,
    PlatformFeeCents,
    ProcessorFeeCents,
    NetAmountCents,
    Currency,
    Status,
    ProcessorPaymentId,
    CreatedAt,
    UpdatedAt,
}
