use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::BusyIntervalDto,
        business::{BusinessDetailDto, PaginatedBusinessesDto},
    },
    server::{
        controller::{
            extract::AppQuery,
            param::{BusyRangeParam, PaginationParam},
        },
        error::AppError,
        model::booking::BusyInterval,
        service::{booking::BookingService, business::BusinessService},
        state::AppState,
    },
};

pub static PUBLIC_TAG: &str = "public";

#[utoipa::path(
    get,
    path = "/api/businesses",
    tag = PUBLIC_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved businesses", body = PaginatedBusinessesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_businesses(
    State(state): State<AppState>,
    AppQuery(pagination): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let businesses = BusinessService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(businesses.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/businesses/{id}",
    tag = PUBLIC_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Business with its active services and workers", body = BusinessDetailDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = BusinessService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Booked intervals of a worker, used by slot pickers.
#[utoipa::path(
    get,
    path = "/api/businesses/{id}/workers/{worker_id}/busy",
    tag = PUBLIC_TAG,
    params(
        ("id" = i32, Path, description = "Business ID"),
        ("worker_id" = i32, Path, description = "Worker ID"),
        ("from" = String, Query, description = "Window start (RFC 3339)"),
        ("to" = String, Query, description = "Window end (RFC 3339)")
    ),
    responses(
        (status = 200, description = "Non-cancelled bookings overlapping the window", body = Vec<BusyIntervalDto>),
        (status = 400, description = "Invalid window", body = ErrorDto),
        (status = 404, description = "Worker not found at this business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_busy_intervals(
    State(state): State<AppState>,
    Path((id, worker_id)): Path<(i32, i32)>,
    AppQuery(range): AppQuery<BusyRangeParam>,
) -> Result<impl IntoResponse, AppError> {
    let intervals = BookingService::new(&state.db)
        .get_busy_intervals(id, worker_id, range.from, range.to)
        .await?;

    let dto: Vec<BusyIntervalDto> = intervals
        .into_iter()
        .map(BusyInterval::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}
