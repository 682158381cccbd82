use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, PaginatedBookingsDto, UpdateBookingStatusDto},
        user::Role,
    },
    server::{
        controller::{
            extract::{AppJson, AppQuery},
            param::PaginationParam,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::{BookingScope, GetBookingsParam},
        service::booking::BookingService,
        state::AppState,
    },
};

pub static WORKER_TAG: &str = "worker";

/// Lists the bookings assigned to the logged in worker.
#[utoipa::path(
    get,
    path = "/api/worker/bookings",
    tag = WORKER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a worker", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    AppQuery(pagination): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let worker = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Worker)])
        .await?;

    let bookings = BookingService::new(&state.db)
        .get_paginated(GetBookingsParam {
            scope: BookingScope::Worker(worker.id),
            page: pagination.page,
            per_page: pagination.per_page(),
        })
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/worker/bookings/{id}/status",
    tag = WORKER_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Successfully updated booking status", body = BookingDto),
        (status = 400, description = "Status transition not allowed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a worker", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let worker = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Worker)])
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(BookingScope::Worker(worker.id), id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
