//! Application errors and their JSON responses.
//!
//! Every handler returns `Result<_, AppError>`. Client mistakes become 400/401/403/404 with
//! their message; everything else is logged and answered with a generic 500.

pub mod auth;
pub mod config;
pub mod internal;
pub mod payment;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, payment::PaymentError,
    },
};

/// Body returned for every 500.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Answered by `AuthError` itself with 401 or 403.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Answered by `PaymentError` itself; signature failures are 400.
    #[error(transparent)]
    PaymentErr(#[from] PaymentError),

    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store migration failed.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Binding the listener or serving failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the message.
    #[error("{0}")]
    BadRequest(String),

    /// 500; the message is only logged.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::PaymentErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers with the generic 500 body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_MESSAGE.to_string(),
        )
    }
}

/// Builds a `{"error": message}` response.
pub fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { error: message })).into_response()
}
