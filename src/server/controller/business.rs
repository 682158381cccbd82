//! Endpoints for business owners managing their businesses.
//!
//! Every route under `/api/business/businesses/{id}` checks that the caller owns the
//! business, or is an admin, through `Permission::ManageBusiness`.

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
        business::{
            BusinessClientDto, BusinessDto, BusinessSettingsDto, CreateBusinessDto,
            UpdateBusinessDto,
        },
        catalog::{CreateServiceDto, ServiceDto, UpdateServiceDto},
        payment::RevenueSummaryDto,
        user::{CreateWorkerDto, UserDto},
    },
    server::{
        controller::{
            extract::{AppJson, AppQuery},
            param::PaginationParam,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            booking::{BookingScope, GetBookingsParam},
            business::{Business, BusinessSettings, CreateBusinessParam, UpdateBusinessParam},
            business_client::BusinessClient,
            catalog::{CreateServiceParam, Service, UpdateServiceParam},
            user::{NewAccountParam, User},
        },
        service::{
            booking::BookingService, business::BusinessService, catalog::CatalogService,
            payment::PaymentService,
        },
        state::AppState,
    },
};

pub static BUSINESS_TAG: &str = "business";

/// Lists the businesses the caller manages; admins see every business.
#[utoipa::path(
    get,
    path = "/api/business/businesses",
    tag = BUSINESS_TAG,
    responses(
        (status = 200, description = "Managed businesses", body = Vec<BusinessDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a business owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_businesses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let businesses: Vec<BusinessDto> = BusinessService::new(&state.db)
        .get_managed(&user)
        .await?
        .into_iter()
        .map(Business::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(businesses)))
}

/// Creates a business owned by the caller.
#[utoipa::path(
    post,
    path = "/api/business/businesses",
    tag = BUSINESS_TAG,
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Successfully created business", body = BusinessDto),
        (status = 400, description = "Invalid business data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a business owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_business(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let business = BusinessService::new(&state.db)
        .create(CreateBusinessParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(business.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/business/businesses/{id}",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved business", body = BusinessDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_business(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let business = BusinessService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(business.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/business/businesses/{id}",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Successfully updated business", body = BusinessDto),
        (status = 400, description = "Invalid business data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_business(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let business = BusinessService::new(&state.db)
        .update(UpdateBusinessParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(business.into_dto())))
}

/// Replaces the opening hours, cancellation window, currency and payment toggle.
#[utoipa::path(
    put,
    path = "/api/business/businesses/{id}/settings",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    request_body = BusinessSettingsDto,
    responses(
        (status = 200, description = "Successfully updated settings", body = BusinessDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<BusinessSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let business = BusinessService::new(&state.db)
        .update_settings(id, BusinessSettings::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(business.into_dto())))
}

/// Lists every service of the business, including inactive ones.
#[utoipa::path(
    get,
    path = "/api/business/businesses/{id}/services",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let services: Vec<ServiceDto> = CatalogService::new(&state.db)
        .list(id)
        .await?
        .into_iter()
        .map(Service::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(services)))
}

#[utoipa::path(
    post,
    path = "/api/business/businesses/{id}/services",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let service = CatalogService::new(&state.db)
        .create(CreateServiceParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/business/businesses/{id}/services/{service_id}",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID"),
        ("service_id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Successfully updated service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business or service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    session: Session,
    Path((id, service_id)): Path<(i32, i32)>,
    AppJson(payload): AppJson<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let service = CatalogService::new(&state.db)
        .update(id, UpdateServiceParam::from_dto(service_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/business/businesses/{id}/services/{service_id}",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID"),
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted service"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business or service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    session: Session,
    Path((id, service_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    CatalogService::new(&state.db).delete(id, service_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/business/businesses/{id}/workers",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved workers", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workers(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let workers: Vec<UserDto> = BusinessService::new(&state.db)
        .get_workers(id)
        .await?
        .into_iter()
        .map(User::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(workers)))
}

/// Creates a worker account attached to the business.
#[utoipa::path(
    post,
    path = "/api/business/businesses/{id}/workers",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    request_body = CreateWorkerDto,
    responses(
        (status = 201, description = "Successfully created worker", body = UserDto),
        (status = 400, description = "Invalid worker data or email already registered", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_worker(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateWorkerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let worker = BusinessService::new(&state.db)
        .add_worker(NewAccountParam::from_worker_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(worker.into_dto())))
}

/// Detaches a worker from the business; the account is kept.
#[utoipa::path(
    delete,
    path = "/api/business/businesses/{id}/workers/{worker_id}",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID"),
        ("worker_id" = i32, Path, description = "Worker ID")
    ),
    responses(
        (status = 204, description = "Successfully detached worker"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business or worker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_worker(
    State(state): State<AppState>,
    session: Session,
    Path((id, worker_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    BusinessService::new(&state.db)
        .remove_worker(id, worker_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/business/businesses/{id}/bookings",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppQuery(pagination): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let bookings = BookingService::new(&state.db)
        .get_paginated(GetBookingsParam {
            scope: BookingScope::Business(id),
            page: pagination.page,
            per_page: pagination.per_page(),
        })
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/business/businesses/{id}/bookings/{booking_id}/status",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID"),
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Successfully updated booking status", body = BookingDto),
        (status = 400, description = "Status transition not allowed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business or booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path((id, booking_id)): Path<(i32, i32)>,
    AppJson(payload): AppJson<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(BookingScope::Business(id), booking_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Lists the clients who have booked at the business.
#[utoipa::path(
    get,
    path = "/api/business/businesses/{id}/clients",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<BusinessClientDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let clients: Vec<BusinessClientDto> = BusinessService::new(&state.db)
        .get_clients(id)
        .await?
        .into_iter()
        .map(BusinessClient::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(clients)))
}

/// Lists the payments of the business with totals over the succeeded ones.
#[utoipa::path(
    get,
    path = "/api/business/businesses/{id}/payments",
    tag = BUSINESS_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Payments and revenue summary", body = RevenueSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageBusiness(id)])
        .await?;

    let revenue = PaymentService::new(&state.db, &state.http_client, &state.payment)
        .revenue(id)
        .await?;

    Ok((StatusCode::OK, Json(revenue.into_dto())))
}
