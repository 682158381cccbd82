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
        booking::{BookingDto, CreateBookingDto, PaginatedBookingsDto},
        payment::CheckoutDto,
        user::Role,
    },
    server::{
        controller::{
            extract::{AppJson, AppQuery},
            param::PaginationParam,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::{BookingRequest, BookingScope, GetBookingsParam},
        service::{booking::BookingService, payment::PaymentService},
        state::AppState,
    },
};

pub static CLIENT_TAG: &str = "client";

#[utoipa::path(
    get,
    path = "/api/client/bookings",
    tag = CLIENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a client", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    AppQuery(pagination): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let client = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Client)])
        .await?;

    let bookings = BookingService::new(&state.db)
        .get_paginated(GetBookingsParam {
            scope: BookingScope::Client(client.id),
            page: pagination.page,
            per_page: pagination.per_page(),
        })
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

/// Books a service with a worker. The booking starts out `PENDING`.
#[utoipa::path(
    post,
    path = "/api/client/bookings",
    tag = CLIENT_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Slot unavailable, outside business hours, or invalid request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a client", body = ErrorDto),
        (status = 404, description = "Business, service or worker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Client)])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(BookingRequest::from_dto(client.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/client/bookings/{id}/cancel",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled booking", body = BookingDto),
        (status = 400, description = "Booking cannot be cancelled anymore", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a client", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let client = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Client)])
        .await?;

    let booking = BookingService::new(&state.db)
        .cancel_by_client(client.id, id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Starts an online payment for a booking.
///
/// Returns the pending payment and the client secret used to confirm it with the
/// processor's client library.
#[utoipa::path(
    post,
    path = "/api/client/bookings/{id}/payment",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 201, description = "Payment intent created", body = CheckoutDto),
        (status = 400, description = "Booking cannot be paid online", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a client", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Payment processor unavailable or internal error", body = ErrorDto)
    ),
)]
pub async fn pay_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let client = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(Role::Client)])
        .await?;

    let checkout = PaymentService::new(&state.db, &state.http_client, &state.payment)
        .checkout(client.id, id)
        .await?;

    Ok((StatusCode::CREATED, Json(checkout.into_dto())))
}
