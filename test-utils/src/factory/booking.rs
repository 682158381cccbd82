//! Booking factory for creating test booking entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// The interval defaults to tomorrow 10:00-10:30 UTC, inside the default
/// opening hours.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, &service, worker.id, client.id)
///     .status("CONFIRMED")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    worker_id: i32,
    service_id: i32,
    business_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    is_paid: bool,
    notes: Option<String>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory for `service`, lasting the service's duration.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `service` - Booked service; its business becomes the booking's business
    /// - `worker_id` - Worker fulfilling the booking
    /// - `client_id` - Client who booked
    pub fn new(
        db: &'a DatabaseConnection,
        service: &entity::service::Model,
        worker_id: i32,
        client_id: i32,
    ) -> Self {
        let start_time = tomorrow_at(10);
        Self {
            db,
            client_id,
            worker_id,
            service_id: service.id,
            business_id: service.business_id,
            start_time,
            end_time: start_time + Duration::minutes(service.duration_minutes as i64),
            status: "PENDING".to_string(),
            is_paid: false,
            notes: None,
        }
    }

    /// Moves the booking to start at `start_time`, keeping its length.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        let length = self.end_time - self.start_time;
        self.start_time = start_time;
        self.end_time = start_time + length;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the stored status string, e.g. `"CONFIRMED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn is_paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(self.client_id),
            worker_id: ActiveValue::Set(self.worker_id),
            service_id: ActiveValue::Set(self.service_id),
            business_id: ActiveValue::Set(self.business_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            is_paid: ActiveValue::Set(self.is_paid),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking for tomorrow at 10:00 UTC.
pub async fn create_booking(
    db: &DatabaseConnection,
    service: &entity::service::Model,
    worker_id: i32,
    client_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, service, worker_id, client_id)
        .build()
        .await
}

/// Returns tomorrow at `hour`:00 UTC.
pub fn tomorrow_at(hour: u32) -> DateTime<Utc> {
    let tomorrow = (Utc::now() + Duration::days(1)).date_naive();
    tomorrow
        .and_hms_opt(hour.min(23), 0, 0)
        .unwrap_or_default()
        .and_utc()
}
