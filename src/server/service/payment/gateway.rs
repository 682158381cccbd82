//! Client for the payment processor's REST API.
//!
//! Speaks the Stripe payment intent API: form-encoded requests authenticated with the
//! secret key as a bearer token, JSON responses with an `error.message` on failure.

use serde::Deserialize;

use crate::server::{config::PaymentConfig, error::payment::PaymentError, error::AppError};

/// Payment intent created by the processor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Deserialize)]
struct ProcessorErrorBody {
    error: ProcessorErrorDetail,
}

#[derive(Deserialize)]
struct ProcessorErrorDetail {
    message: String,
}

pub struct PaymentGateway<'a> {
    http_client: &'a reqwest::Client,
    config: &'a PaymentConfig,
}

impl<'a> PaymentGateway<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a PaymentConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Asks the processor to create a payment intent for a booking.
    ///
    /// # Arguments
    /// - `booking_id` - Stored in the intent's metadata
    /// - `amount_cents` - Amount to charge in minor units
    /// - `currency` - Lowercase ISO currency code
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)` - Intent id and client secret
    /// - `Err(PaymentError::NotConfigured)` - No secret key configured
    /// - `Err(PaymentError::Processor)` - Processor rejected the request
    /// - `Err(AppError::ReqwestErr)` - Network failure or malformed response
    pub async fn create_payment_intent(
        &self,
        booking_id: i32,
        amount_cents: i64,
        currency: &str,
    ) -> Result<PaymentIntent, AppError> {
        let secret_key = self
            .config
            .secret_key
            .as_deref()
            .ok_or(PaymentError::NotConfigured("STRIPE_SECRET_KEY"))?;

        let url = self
            .config
            .api_base
            .join("v1/payment_intents")
            .map_err(|e| AppError::InternalError(format!("Invalid payment API URL: {}", e)))?;

        let form = [
            ("amount", amount_cents.to_string()),
            ("currency", currency.to_string()),
            ("metadata[booking_id]", booking_id.to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ];

        let response = self
            .http_client
            .post(url)
            .bearer_auth(secret_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ProcessorErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            };

            return Err(PaymentError::Processor {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Ok(response.json::<PaymentIntent>().await?)
    }
}
