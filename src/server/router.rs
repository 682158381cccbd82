//! Route table, layers and OpenAPI document.
//!
//! API routes are registered per access tier on `OpenApiRouter`s so their
//! `#[utoipa::path]` annotations are collected into one document. Each gated tier
//! carries its role check as a route layer; the tiers are then merged with the
//! public routes, the Swagger UI and the HTML pages.

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tower_sessions::{service::SignedCookie, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, business, client, page, public, webhook, worker},
    error::AppError,
    middleware::{
        headers::with_security_headers,
        role::{require_admin, require_business, require_client, require_worker},
    },
    state::AppState,
};

/// Seconds between replenished login attempts per peer IP.
const LOGIN_REPLENISH_SECS: u64 = 6;
/// Login attempts a peer IP may make in a burst.
const LOGIN_BURST_SIZE: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BarberBook API",
        description = "Booking API for barbershops and salons"
    ),
    tags(
        (name = "auth", description = "Registration, login and profile"),
        (name = "public", description = "Public business listings"),
        (name = "admin", description = "Platform administration"),
        (name = "business", description = "Business management for owners"),
        (name = "worker", description = "Bookings assigned to workers"),
        (name = "client", description = "Client bookings and payments"),
        (name = "webhook", description = "Payment processor callbacks")
    )
)]
pub struct ApiDoc;

/// Builds the complete application.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session_layer` - Signed cookie session layer backed by the SQLite store
/// - `cors` - CORS policy for the configured application origin
///
/// # Returns
/// - `Ok(Router)` - Router ready to be served with peer address connect info
/// - `Err(AppError::InternalError)` - Login rate limit configuration was rejected
pub fn app(
    state: AppState,
    session_layer: SessionManagerLayer<SqliteStore, SignedCookie>,
    cors: CorsLayer,
) -> Result<Router, AppError> {
    let (api, openapi) = api_router()?.split_for_parts();

    let router = api
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .route("/", get(page::landing))
        .route("/businesses/{id}", get(page::business_page))
        .with_state(state)
        .layer(session_layer)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(with_security_headers(router))
}

/// Collects every API route with its OpenAPI description.
pub fn api_router() -> Result<OpenApiRouter<AppState>, AppError> {
    Ok(OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(login_routes()?)
        .merge(auth_routes())
        .merge(public_routes())
        .merge(admin_routes())
        .merge(business_routes())
        .merge(worker_routes())
        .merge(client_routes())
        .merge(webhook_routes()))
}

/// Credential endpoints, rate limited per peer IP.
fn login_routes() -> Result<OpenApiRouter<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(LOGIN_REPLENISH_SECS)
        .burst_size(LOGIN_BURST_SIZE)
        .finish()
        .ok_or_else(|| {
            AppError::InternalError("Invalid login rate limit configuration".to_string())
        })?;

    Ok(OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::register))
        .layer(GovernorLayer::new(Arc::new(governor_config))))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user, auth::update_user))
}

fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(public::get_businesses))
        .routes(routes!(public::get_business))
        .routes(routes!(public::get_busy_intervals))
}

fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(admin::get_users, admin::create_user))
        .routes(routes!(admin::get_user, admin::update_user, admin::delete_user))
        .routes(routes!(admin::get_businesses, admin::create_business))
        .routes(routes!(admin::update_business, admin::delete_business))
        .routes(routes!(admin::get_bookings))
        .routes(routes!(admin::get_payments))
        .route_layer(from_fn(require_admin))
}

fn business_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(business::get_businesses, business::create_business))
        .routes(routes!(business::get_business, business::update_business))
        .routes(routes!(business::update_settings))
        .routes(routes!(business::get_services, business::create_service))
        .routes(routes!(business::update_service, business::delete_service))
        .routes(routes!(business::get_workers, business::create_worker))
        .routes(routes!(business::remove_worker))
        .routes(routes!(business::get_bookings))
        .routes(routes!(business::update_booking_status))
        .routes(routes!(business::get_clients))
        .routes(routes!(business::get_payments))
        .route_layer(from_fn(require_business))
}

fn worker_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(worker::get_bookings))
        .routes(routes!(worker::update_booking_status))
        .route_layer(from_fn(require_worker))
}

fn client_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(client::get_bookings, client::create_booking))
        .routes(routes!(client::cancel_booking))
        .routes(routes!(client::pay_booking))
        .route_layer(from_fn(require_client))
}

fn webhook_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(webhook::payment_webhook))
}
