//! Booking fixtures for creating in-memory test data.

use chrono::{Duration, Utc};
use entity::booking;

/// Creates a pending booking entity model starting in one day, lasting 30 minutes.
pub fn entity() -> booking::Model {
    entity_builder().build()
}

/// Creates a booking entity builder for customizing fixture values.
pub fn entity_builder() -> BookingEntityBuilder {
    let now = Utc::now();
    let start_time = now + Duration::days(1);
    BookingEntityBuilder {
        model: booking::Model {
            id: 1,
            client_id: 1,
            worker_id: 2,
            service_id: 1,
            business_id: 1,
            start_time,
            end_time: start_time + Duration::minutes(30),
            status: "PENDING".to_string(),
            is_paid: false,
            notes: None,
            created_at: now,
            updated_at: now,
        },
    }
}

/// Builder for booking entity fixtures.
pub struct BookingEntityBuilder {
    model: booking::Model,
}

impl BookingEntityBuilder {
    /// Sets the raw status column.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.model.status = status.into();
        self
    }

    pub fn build(self) -> booking::Model {
        self.model
    }
}
