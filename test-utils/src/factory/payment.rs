//! Payment factory for creating test payment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
///
/// Default amounts correspond to a 2500 cent charge with the default 5% platform fee.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    booking_id: i32,
    amount_cents: i64,
    platform_fee_cents: i64,
    processor_fee_cents: i64,
    currency: String,
    status: String,
    processor_payment_id: Option<String>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - amount_cents: `2500`, platform fee `125`, processor fee `103`
    /// - currency: `"usd"`
    /// - status: `"PENDING"`
    /// - processor_payment_id: `"pi_test_{id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection, booking_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            booking_id,
            amount_cents: 2500,
            platform_fee_cents: 125,
            processor_fee_cents: 103,
            currency: "usd".to_string(),
            status: "PENDING".to_string(),
            processor_payment_id: Some(format!("pi_test_{}", id)),
        }
    }

    /// Sets the charged amount and fees; the net amount is derived.
    pub fn amounts(mut self, amount: i64, platform_fee: i64, processor_fee: i64) -> Self {
        self.amount_cents = amount;
        self.platform_fee_cents = platform_fee;
        self.processor_fee_cents = processor_fee;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn processor_payment_id(mut self, processor_payment_id: Option<String>) -> Self {
        self.processor_payment_id = processor_payment_id;
        self
    }

    /// Builds and inserts the payment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::payment::Model)` - Created payment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now();
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            booking_id: ActiveValue::Set(self.booking_id),
            amount_cents: ActiveValue::Set(self.amount_cents),
            platform_fee_cents: ActiveValue::Set(self.platform_fee_cents),
            processor_fee_cents: ActiveValue::Set(self.processor_fee_cents),
            net_amount_cents: ActiveValue::Set(
                self.amount_cents - self.platform_fee_cents - self.processor_fee_cents,
            ),
            currency: ActiveValue::Set(self.currency),
            status: ActiveValue::Set(self.status),
            processor_payment_id: ActiveValue::Set(self.processor_payment_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending payment for a booking.
pub async fn create_payment(
    db: &DatabaseConnection,
    booking_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, booking_id).build().await
}
