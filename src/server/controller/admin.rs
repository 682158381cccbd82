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
        booking::PaginatedBookingsDto,
        business::{AdminCreateBusinessDto, BusinessDto, UpdateBusinessDto},
        payment::PaginatedPaymentsDto,
        user::{CreateUserDto, PaginatedUsersDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{
            extract::{AppJson, AppQuery},
            param::{PaginationParam, UserListParam},
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            booking::{BookingScope, GetBookingsParam},
            business::{Business, CreateBusinessParam, UpdateBusinessParam},
            user::{GetAllUsersParam, NewAccountParam, UpdateUserParam},
        },
        service::{
            booking::BookingService, business::BusinessService, payment::PaymentService,
            user::UserService,
        },
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("role" = Option<String>, Query, description = "Only list users with this role")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    AppQuery(params): AppQuery<UserListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: params.page,
            per_page: params.per_page(),
            role: params.role,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data or email already registered", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create_account(NewAccountParam::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_user(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update_user(UpdateUserParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Deletes a user account; admins cannot delete their own account.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Admin attempted to delete itself", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete_user(admin.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/businesses",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All businesses", body = Vec<BusinessDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_businesses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let businesses: Vec<BusinessDto> = BusinessService::new(&state.db)
        .get_managed(&admin)
        .await?
        .into_iter()
        .map(Business::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(businesses)))
}

#[utoipa::path(
    post,
    path = "/api/admin/businesses",
    tag = ADMIN_TAG,
    request_body = AdminCreateBusinessDto,
    responses(
        (status = 201, description = "Successfully created business", body = BusinessDto),
        (status = 400, description = "Invalid business data or owner is not a business owner", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_business(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<AdminCreateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let business = BusinessService::new(&state.db)
        .create(CreateBusinessParam::from_admin_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(business.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/businesses/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Successfully updated business", body = BusinessDto),
        (status = 400, description = "Invalid business data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
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
        .require(&[Permission::Admin])
        .await?;

    let business = BusinessService::new(&state.db)
        .update(UpdateBusinessParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(business.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/businesses/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted business"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_business(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    BusinessService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    AppQuery(pagination): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bookings = BookingService::new(&state.db)
        .get_paginated(GetBookingsParam {
            scope: BookingScope::All,
            page: pagination.page,
            per_page: pagination.per_page(),
        })
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/payments",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved payments", body = PaginatedPaymentsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
    AppQuery(pagination): AppQuery<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payments = PaymentService::new(&state.db, &state.http_client, &state.payment)
        .get_paginated(pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(payments.into_dto())))
}
