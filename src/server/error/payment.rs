use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// Payment processor keys are absent from configuration.
    #[error("Payment processor is not configured: {0}")]
    NotConfigured(&'static str),

    /// Webhook signature header is missing, malformed, or does not match.
    #[error("Invalid webhook signature: {0}")]
    InvalidSignature(String),

    /// Webhook signature timestamp is outside the accepted tolerance.
    #[error("Webhook signature timestamp {timestamp} is outside tolerance")]
    StaleSignature { timestamp: i64 },

    /// Payment processor answered with an error.
    #[error("Payment processor error ({status}): {message}")]
    Processor { status: u16, message: String },
}

/// Converts payment errors into HTTP responses.
///
/// Signature failures are the caller's fault and map to 400 Bad Request. Missing
/// configuration and processor failures are logged and return a generic 500.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSignature(_) | Self::StaleSignature { .. } => {
                tracing::warn!("Rejected payment webhook: {}", self);
                error_response(
                    StatusCode::BAD_REQUEST,
                    "Invalid webhook signature".to_string(),
                )
            }
            err => super::InternalServerError(err).into_response(),
        }
    }
}
