use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, payment::WebhookAckDto},
    server::{error::AppError, service::payment::PaymentService, state::AppState},
};

pub static WEBHOOK_TAG: &str = "webhook";

/// Header carrying the processor's `t=...,v1=...` signature.
pub static SIGNATURE_HEADER: &str = "Stripe-Signature";

/// Receives payment processor events.
///
/// The raw body is verified against the signature header before it is parsed.
#[utoipa::path(
    post,
    path = "/api/webhooks/payment",
    tag = WEBHOOK_TAG,
    request_body(content = String, description = "Processor event JSON", content_type = "application/json"),
    responses(
        (status = 200, description = "Event verified and handled", body = WebhookAckDto),
        (status = 400, description = "Missing or invalid signature, or unreadable event", body = ErrorDto),
        (status = 500, description = "Webhook secret not configured or internal error", body = ErrorDto)
    ),
)]
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    PaymentService::new(&state.db, &state.http_client, &state.payment)
        .handle_webhook(&body, signature)
        .await?;

    Ok((StatusCode::OK, Json(WebhookAckDto { received: true })))
}
