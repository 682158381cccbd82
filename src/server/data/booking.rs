//! Booking data repository.
//!
//! Provides the `BookingRepository` for inserting bookings, detecting overlapping
//! reservations of a worker, listing bookings per scope and applying status changes.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::booking::BookingStatus,
    server::{
        error::AppError,
        model::booking::{
            Booking, BookingScope, BusyInterval, CreateBookingParam, GetBookingsParam,
            PaginatedBookings,
        },
        util::parse::total_pages,
    },
};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking as `PENDING` and unpaid.
    ///
    /// Does not check for conflicts; callers run `has_conflict` first.
    ///
    /// # Arguments
    /// - `param` - Participants, service and the already computed interval
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        let now = Utc::now();

        let entity = entity::booking::ActiveModel {
            client_id: ActiveValue::Set(param.client_id),
            worker_id: ActiveValue::Set(param.worker_id),
            service_id: ActiveValue::Set(param.service_id),
            business_id: ActiveValue::Set(param.business_id),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            is_paid: ActiveValue::Set(false),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    /// Finds a booking by ID
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(AppError)` - Database error or unreadable stored status
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        entity.map(Booking::from_entity).transpose()
    }

    /// Checks whether a worker already has a booking overlapping `[start, end)`.
    ///
    /// Two intervals overlap when `existing.start < end AND existing.end > start`, so
    /// back-to-back bookings do not conflict. Cancelled bookings are ignored.
    ///
    /// # Arguments
    /// - `worker_id` - Worker whose schedule is checked
    /// - `start` - Start of the requested interval
    /// - `end` - End of the requested interval
    ///
    /// # Returns
    /// - `Ok(true)` - At least one non-cancelled booking overlaps
    /// - `Ok(false)` - The interval is free
    /// - `Err(AppError)` - Database error during count query
    pub async fn has_conflict(
        &self,
        worker_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::WorkerId.eq(worker_id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
            .filter(entity::booking::Column::StartTime.lt(end))
            .filter(entity::booking::Column::EndTime.gt(start))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the non-cancelled intervals of a worker that overlap `[from, to)`,
    /// ordered by start time.
    pub async fn get_busy_intervals(
        &self,
        worker_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>, AppError> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::WorkerId.eq(worker_id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
            .filter(entity::booking::Column::StartTime.lt(to))
            .filter(entity::booking::Column::EndTime.gt(from))
            .order_by_asc(entity::booking::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|b| BusyInterval {
                start_time: b.start_time,
                end_time: b.end_time,
            })
            .collect())
    }

    /// Gets bookings within a scope with pagination, most recent start first.
    ///
    /// # Arguments
    /// - `param` - Scope (all, business, worker or client), page and page size
    ///
    /// # Returns
    /// - `Ok(PaginatedBookings)` - Bookings for the requested page with totals
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        param: GetBookingsParam,
    ) -> Result<PaginatedBookings, AppError> {
        let query = entity::prelude::Booking::find();
        let query = match param.scope {
            BookingScope::All => query,
            BookingScope::Business(id) => {
                query.filter(entity::booking::Column::BusinessId.eq(id))
            }
            BookingScope::Worker(id) => query.filter(entity::booking::Column::WorkerId.eq(id)),
            BookingScope::Client(id) => query.filter(entity::booking::Column::ClientId.eq(id)),
        };

        let paginator = query
            .order_by_desc(entity::booking::Column::StartTime)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let bookings = paginator
            .fetch_page(param.page)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedBookings {
            bookings,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total_pages(total, param.per_page),
        })
    }

    /// Sets the status of a booking without checking the transition table.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)?))
    }

    /// Marks a booking as paid or unpaid.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking with that ID
    pub async fn set_paid(&self, id: i32, is_paid: bool) -> Result<Option<Booking>, AppError> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = entity.into();
        active.is_paid = ActiveValue::Set(is_paid);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)?))
    }
}
