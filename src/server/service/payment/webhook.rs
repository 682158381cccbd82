//! Verification and decoding of payment processor webhooks.
//!
//! The processor signs each delivery with a `Stripe-Signature` header of the form
//! `t=<unix seconds>,v1=<hex>`, where the `v1` value is the HMAC-SHA256 of
//! `"{t}.{raw body}"` keyed with the webhook secret. Several `v1` entries may be
//! present while secrets are rolled; any one matching is accepted.

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::server::error::payment::PaymentError;

/// Maximum age, in seconds, of a signature timestamp.
pub const SIGNATURE_TOLERANCE_SECS: i64 = 300;

type HmacSha256 = Hmac<Sha256>;

/// Event kinds the application reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    PaymentSucceeded { payment_intent: String },
    PaymentFailed { payment_intent: String },
    ChargeRefunded { payment_intent: String },
    Ignored { kind: String },
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    data: RawEventData,
}

#[derive(Deserialize)]
struct RawEventData {
    object: RawEventObject,
}

#[derive(Deserialize)]
struct RawEventObject {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    payment_intent: Option<String>,
}

/// Checks a webhook signature header against the raw request body.
///
/// # Arguments
/// - `payload` - Raw request body, exactly as received
/// - `header` - Value of the `Stripe-Signature` header
/// - `secret` - Webhook signing secret
/// - `now` - Current unix time in seconds
///
/// # Returns
/// - `Ok(())` - A `v1` signature matches and the timestamp is within tolerance
/// - `Err(PaymentError::InvalidSignature)` - Header malformed or no signature matches
/// - `Err(PaymentError::StaleSignature)` - Timestamp outside tolerance
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: i64,
) -> Result<(), PaymentError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse::<i64>().ok(),
            Some(("v1", value)) => signatures.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp
        .ok_or_else(|| PaymentError::InvalidSignature("missing timestamp".to_string()))?;
    if signatures.is_empty() {
        return Err(PaymentError::InvalidSignature(
            "missing v1 signature".to_string(),
        ));
    }
    if now.abs_diff(timestamp) > SIGNATURE_TOLERANCE_SECS.unsigned_abs() {
        return Err(PaymentError::StaleSignature { timestamp });
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| PaymentError::InvalidSignature(e.to_string()))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    let matched = signatures.into_iter().any(|signature| {
        hex::decode(signature)
            .map(|bytes| mac.clone().verify_slice(&bytes).is_ok())
            .unwrap_or(false)
    });

    if matched {
        Ok(())
    } else {
        Err(PaymentError::InvalidSignature(
            "no matching signature".to_string(),
        ))
    }
}

/// Computes the header value the processor would send for `payload` at `timestamp`.
#[cfg(test)]
pub fn sign_payload(payload: &[u8], secret: &str, timestamp: i64) -> Result<String, PaymentError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| PaymentError::InvalidSignature(e.to_string()))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    Ok(format!(
        "t={},v1={}",
        timestamp,
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Decodes a verified webhook body.
///
/// # Returns
/// - `Ok(WebhookEvent)` - Decoded event; unknown kinds become `Ignored`
/// - `Err(serde_json::Error)` - Body is not an event object or lacks the intent id
pub fn parse_event(payload: &[u8]) -> Result<WebhookEvent, serde_json::Error> {
    use serde::de::Error;

    let event: RawEvent = serde_json::from_slice(payload)?;
    let object = event.data.object;

    let event = match event.kind.as_str() {
        "payment_intent.succeeded" => WebhookEvent::PaymentSucceeded {
            payment_intent: object
                .id
                .ok_or_else(|| serde_json::Error::missing_field("id"))?,
        },
        "payment_intent.payment_failed" => WebhookEvent::PaymentFailed {
            payment_intent: object
                .id
                .ok_or_else(|| serde_json::Error::missing_field("id"))?,
        },
        "charge.refunded" => WebhookEvent::ChargeRefunded {
            payment_intent: object
                .payment_intent
                .ok_or_else(|| serde_json::Error::missing_field("payment_intent"))?,
        },
        _ => WebhookEvent::Ignored { kind: event.kind },
    };

    Ok(event)
}
