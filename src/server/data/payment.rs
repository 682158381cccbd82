//! Payment data repository.
//!
//! Provides the `PaymentRepository` for recording payment attempts against bookings
//! and applying status updates reported by the payment processor.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TryIntoModel,
};

use crate::{
    model::payment::PaymentStatus,
    server::{
        error::AppError,
        model::payment::{PaginatedPayments, Payment, UpsertPaymentParam},
        util::parse::total_pages,
    },
};

/// Repository providing database operations for payments.
pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    /// Creates a new PaymentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PaymentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pending payment attempt for a booking.
    ///
    /// A booking has at most one payment row. If one exists it is reset to `PENDING`
    /// with the new amounts and processor id, otherwise a new row is inserted.
    ///
    /// # Arguments
    /// - `param` - Booking, fee breakdown, currency and processor payment id
    ///
    /// # Returns
    /// - `Ok(Payment)` - The created or refreshed payment
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert_pending(&self, param: UpsertPaymentParam) -> Result<Payment, AppError> {
        let now = Utc::now();
        let existing = entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(param.booking_id))
            .one(self.db)
            .await?;

        let mut active = match existing {
            Some(entity) => entity.into(),
            None => entity::payment::ActiveModel {
                booking_id: ActiveValue::Set(param.booking_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            },
        };
        active.amount_cents = ActiveValue::Set(param.fees.amount_cents);
        active.platform_fee_cents = ActiveValue::Set(param.fees.platform_fee_cents);
        active.processor_fee_cents = ActiveValue::Set(param.fees.processor_fee_cents);
        active.net_amount_cents = ActiveValue::Set(param.fees.net_amount_cents);
        active.currency = ActiveValue::Set(param.currency);
        active.status = ActiveValue::Set(PaymentStatus::Pending.as_str().to_string());
        active.processor_payment_id = ActiveValue::Set(Some(param.processor_payment_id));
        active.updated_at = ActiveValue::Set(now);

        let entity = active.save(self.db).await?.try_into_model()?;

        Payment::from_entity(entity)
    }

    /// Finds the payment of a booking.
    pub async fn find_by_booking_id(&self, booking_id: i32) -> Result<Option<Payment>, AppError> {
        let entity = entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await?;

        entity.map(Payment::from_entity).transpose()
    }

    /// Finds a payment by the id the processor assigned to it.
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - Payment found
    /// - `Ok(None)` - No payment was created for that processor id
    pub async fn find_by_processor_id(
        &self,
        processor_payment_id: &str,
    ) -> Result<Option<Payment>, AppError> {
        let entity = entity::prelude::Payment::find()
            .filter(entity::payment::Column::ProcessorPaymentId.eq(processor_payment_id))
            .one(self.db)
            .await?;

        entity.map(Payment::from_entity).transpose()
    }

    /// Sets the status of a payment.
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - The updated payment
    /// - `Ok(None)` - No payment with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, AppError> {
        let Some(entity) = entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::payment::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Payment::from_entity(entity)?))
    }

    /// Gets every payment for bookings of a business, newest first.
    pub async fn get_by_business(&self, business_id: i32) -> Result<Vec<Payment>, AppError> {
        entity::prelude::Payment::find()
            .join(
                JoinType::InnerJoin,
                entity::payment::Relation::Booking.def(),
            )
            .filter(entity::booking::Column::BusinessId.eq(business_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect()
    }

    /// Gets all payments with pagination, newest first.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPayments, AppError> {
        let paginator = entity::prelude::Payment::find()
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let payments = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedPayments {
            payments,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
