use chrono::{Duration, Utc};

use crate::{
    model::booking::BookingStatus,
    server::{
        error::AppError,
        model::booking::{BookingRequest, BookingScope},
        service::booking::BookingService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::tomorrow_at},
};

mod create;

fn request(
    shop: &factory::helpers::BusinessWithDependencies,
    client_id: i32,
    start_time: chrono::DateTime<Utc>,
) -> BookingRequest {
    BookingRequest {
        client_id,
        business_id: shop.business.id,
        service_id: shop.service.id,
        worker_id: shop.worker.id,
        start_time,
        notes: None,
    }
}
