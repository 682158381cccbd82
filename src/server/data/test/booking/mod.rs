use chrono::Duration;

use crate::{
    model::booking::BookingStatus,
    server::{
        data::booking::BookingRepository,
        error::AppError,
        model::booking::{BookingScope, CreateBookingParam, GetBookingsParam},
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::tomorrow_at},
};

mod create;
mod get_paginated;
mod has_conflict;
mod update_status;
