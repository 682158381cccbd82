//! Booking domain models and parameters.
//!
//! A booking reserves a worker for the `[start_time, end_time)` interval of one
//! service at one business. Status changes follow the transition table on
//! `BookingStatus::can_transition_to`.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{
        BookingDto, BookingStatus, BusyIntervalDto, CreateBookingDto, PaginatedBookingsDto,
    },
    server::{error::AppError, util::parse::parse_booking_status},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub client_id: i32,
    pub worker_id: i32,
    pub service_id: i32,
    pub business_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub is_paid: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            client_id: self.client_id,
            worker_id: self.worker_id,
            service_id: self.service_id,
            business_id: self.business_id,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
            is_paid: self.is_paid,
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(AppError::InternalErr(ParseStatus))` - Stored status is not recognized
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let status = parse_booking_status(&entity.status)?;

        Ok(Self {
            id: entity.id,
            client_id: entity.client_id,
            worker_id: entity.worker_id,
            service_id: entity.service_id,
            business_id: entity.business_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status,
            is_paid: entity.is_paid,
            notes: entity.notes,
            created_at: entity.created_at,
        })
    }
}

/// Returns true when the half-open intervals `[a_start, a_end)` and
/// `[b_start, b_end)` share at least one instant.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Validated request from a client to book a service.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub client_id: i32,
    pub business_id: i32,
    pub service_id: i32,
    pub worker_id: i32,
    pub start_time: DateTime<Utc>,
    pub notes: Option<String>,
}

impl BookingRequest {
    pub fn from_dto(client_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            client_id,
            business_id: dto.business_id,
            service_id: dto.service_id,
            worker_id: dto.worker_id,
            start_time: dto.start_time,
            notes: dto.notes,
        }
    }
}

/// Row-level parameters for inserting a booking once all checks passed.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub client_id: i32,
    pub worker_id: i32,
    pub service_id: i32,
    pub business_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Which bookings a listing covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookingScope {
    All,
    Business(i32),
    Worker(i32),
    Client(i32),
}

#[derive(Debug, Clone)]
pub struct GetBookingsParam {
    pub scope: BookingScope,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBookings {
    pub bookings: Vec<Booking>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBookings {
    pub fn into_dto(self) -> PaginatedBookingsDto {
        PaginatedBookingsDto {
            bookings: self.bookings.into_iter().map(Booking::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Interval during which a worker is unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct BusyInterval {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl BusyInterval {
    pub fn into_dto(self) -> BusyIntervalDto {
        BusyIntervalDto {
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
