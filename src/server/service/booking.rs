//! Booking service for reservations and their status lifecycle.
//!
//! This module provides the `BookingService`, which validates new bookings against the
//! business's catalog, staff, opening hours and the worker's existing schedule, and
//! moves bookings along the status transition table on behalf of clients, workers and
//! business managers.

use chrono::{DateTime, Duration, Timelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::booking::BookingStatus,
    server::{
        data::{
            booking::BookingRepository, business::BusinessRepository,
            business_client::BusinessClientRepository, catalog::ServiceRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            booking::{
                Booking, BookingRequest, BookingScope, BusyInterval, CreateBookingParam,
                GetBookingsParam, PaginatedBookings,
            },
            business::BusinessSettings,
        },
    },
};

/// Longest window that can be queried for busy intervals.
const MAX_BUSY_WINDOW_DAYS: i64 = 31;

/// Service providing business logic for bookings.
pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking for a client.
    ///
    /// Checks run in order: the business exists; the service exists, is offered by the
    /// business and is active; the worker exists and works at the business; the start
    /// lies in the future; the whole interval fits inside the opening hours of the
    /// start's UTC day; the worker has no overlapping non-cancelled booking. The client
    /// is recorded as a client of the business on success.
    ///
    /// # Arguments
    /// - `request` - Client, business, service, worker, start time and notes
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking with `end_time = start + duration`
    /// - `Err(AppError::NotFound)` - Business, service or worker does not exist
    /// - `Err(AppError::BadRequest)` - Any other check failed
    pub async fn create(&self, request: BookingRequest) -> Result<Booking, AppError> {
        let business = BusinessRepository::new(self.db)
            .find_by_id(request.business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        let service = ServiceRepository::new(self.db)
            .find_by_id(request.service_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        if service.business_id != business.id {
            return Err(AppError::BadRequest(
                "Service is not offered by this business".to_string(),
            ));
        }
        if !service.active {
            return Err(AppError::BadRequest(
                "Service is not available".to_string(),
            ));
        }

        let worker = UserRepository::new(self.db)
            .find_by_id(request.worker_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Worker not found".to_string()))?;
        if !worker.works_at(business.id) {
            return Err(AppError::BadRequest(
                "Worker does not work at this business".to_string(),
            ));
        }

        let start_time = request.start_time;
        if start_time <= Utc::now() {
            return Err(AppError::BadRequest(
                "Booking must start in the future".to_string(),
            ));
        }
        let end_time = start_time
            .checked_add_signed(Duration::minutes(service.duration_minutes as i64))
            .ok_or_else(|| AppError::BadRequest("Booking start time is out of range".to_string()))?;
        if !within_opening_hours(&business.settings, start_time, end_time) {
            return Err(AppError::BadRequest(
                "The selected time is outside business hours".to_string(),
            ));
        }

        let booking_repo = BookingRepository::new(self.db);
        if booking_repo
            .has_conflict(worker.id, start_time, end_time)
            .await?
        {
            return Err(AppError::BadRequest(
                "The selected time slot is no longer available".to_string(),
            ));
        }

        let booking = booking_repo
            .create(CreateBookingParam {
                client_id: request.client_id,
                worker_id: worker.id,
                service_id: service.id,
                business_id: business.id,
                start_time,
                end_time,
                notes: request.notes,
            })
            .await?;

        BusinessClientRepository::new(self.db)
            .ensure(business.id, request.client_id)
            .await?;

        tracing::info!(
            "Client {} booked service {} with worker {} at {}",
            booking.client_id,
            booking.service_id,
            booking.worker_id,
            booking.start_time
        );

        Ok(booking)
    }

    /// Lists bookings within a scope.
    pub async fn get_paginated(
        &self,
        param: GetBookingsParam,
    ) -> Result<PaginatedBookings, AppError> {
        BookingRepository::new(self.db).get_paginated(param).await
    }

    /// Moves a booking to a new status along the transition table.
    ///
    /// # Arguments
    /// - `scope` - `Worker(id)` or `Business(id)`; bookings outside the scope are
    ///   reported as missing
    /// - `booking_id` - Booking to update
    /// - `status` - Target status
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(AppError::NotFound)` - No such booking within the scope
    /// - `Err(AppError::BadRequest)` - The transition is not allowed
    pub async fn update_status(
        &self,
        scope: BookingScope,
        booking_id: i32,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .filter(|booking| in_scope(booking, scope))
            .ok_or_else(booking_not_found)?;

        if !booking.status.can_transition_to(status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change booking status from {} to {}",
                booking.status, status
            )));
        }

        let updated = booking_repo
            .update_status(booking.id, status)
            .await?
            .ok_or_else(booking_not_found)?;

        tracing::info!(
            "Booking {} moved from {} to {}",
            updated.id,
            booking.status,
            updated.status
        );

        Ok(updated)
    }

    /// Cancels a client's own booking.
    ///
    /// Only pending or confirmed bookings can be cancelled, and only while the
    /// business's cancellation window has not started, i.e. while
    /// `now + cancellation_window_hours <= start_time`.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The cancelled booking
    /// - `Err(AppError::NotFound)` - No such booking for this client
    /// - `Err(AppError::BadRequest)` - Wrong status or too late to cancel
    pub async fn cancel_by_client(
        &self,
        client_id: i32,
        booking_id: i32,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let booking = booking_repo
            .find_by_id(booking_id)
            .await?
            .filter(|booking| booking.client_id == client_id)
            .ok_or_else(booking_not_found)?;

        if !matches!(
            booking.status,
            BookingStatus::Pending | BookingStatus::Confirmed
        ) {
            return Err(AppError::BadRequest(format!(
                "A {} booking cannot be cancelled",
                booking.status
            )));
        }

        let business = BusinessRepository::new(self.db)
            .find_by_id(booking.business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        let window = Duration::hours(business.settings.cancellation_window_hours as i64);
        if booking.start_time.signed_duration_since(Utc::now()) < window {
            return Err(AppError::BadRequest(format!(
                "Bookings can only be cancelled at least {} hours in advance",
                business.settings.cancellation_window_hours
            )));
        }

        let cancelled = booking_repo
            .update_status(booking.id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(booking_not_found)?;

        tracing::info!("Client {} cancelled booking {}", client_id, booking_id);

        Ok(cancelled)
    }

    /// Lists the booked intervals of a worker that overlap `[from, to)`.
    ///
    /// # Returns
    /// - `Ok(Vec<BusyInterval>)` - Non-cancelled intervals ordered by start
    /// - `Err(AppError::NotFound)` - The worker does not work at this business
    /// - `Err(AppError::BadRequest)` - Empty or overly long window
    pub async fn get_busy_intervals(
        &self,
        business_id: i32,
        worker_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>, AppError> {
        if to <= from {
            return Err(AppError::BadRequest(
                "The end of the range must be after its start".to_string(),
            ));
        }
        if to - from > Duration::days(MAX_BUSY_WINDOW_DAYS) {
            return Err(AppError::BadRequest(format!(
                "The range cannot exceed {} days",
                MAX_BUSY_WINDOW_DAYS
            )));
        }

        UserRepository::new(self.db)
            .find_by_id(worker_id)
            .await?
            .filter(|worker| worker.works_at(business_id))
            .ok_or_else(|| AppError::NotFound("Worker not found".to_string()))?;

        BookingRepository::new(self.db)
            .get_busy_intervals(worker_id, from, to)
            .await
    }
}

fn booking_not_found() -> AppError {
    AppError::NotFound("Booking not found".to_string())
}

fn in_scope(booking: &Booking, scope: BookingScope) -> bool {
    match scope {
        BookingScope::All => true,
        BookingScope::Business(id) => booking.business_id == id,
        BookingScope::Worker(id) => booking.worker_id == id,
        BookingScope::Client(id) => booking.client_id == id,
    }
}

/// Whether `[start, end)` lies inside the opening hours of the start's UTC day.
///
/// A closing hour of 24 means the business stays open until midnight.
fn within_opening_hours(
    settings: &BusinessSettings,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    if start.hour() < settings.opening_hour as u32 {
        return false;
    }

    let Some(midnight) = start.date_naive().and_hms_opt(0, 0, 0) else {
        return false;
    };
    let Some(closing) = midnight
        .and_utc()
        .checked_add_signed(Duration::hours(settings.closing_hour as i64))
    else {
        return false;
    };

    end <= closing
}
