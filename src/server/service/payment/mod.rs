//! Payment service for online booking payments.
//!
//! This module provides the `PaymentService`, which starts checkouts through the
//! payment processor, applies the processor's webhook events to payments and bookings,
//! and reports revenue per business.

pub mod gateway;
pub mod webhook;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{booking::BookingStatus, payment::PaymentStatus},
    server::{
        config::PaymentConfig,
        data::{
            booking::BookingRepository, business::BusinessRepository,
            catalog::ServiceRepository, payment::PaymentRepository,
        },
        error::{payment::PaymentError, AppError},
        model::payment::{
            Checkout, FeeBreakdown, PaginatedPayments, RevenueSummary, UpsertPaymentParam,
        },
        service::payment::{
            gateway::PaymentGateway,
            webhook::{parse_event, verify_signature, WebhookEvent},
        },
    },
};

/// Service providing business logic for payments.
pub struct PaymentService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub config: &'a PaymentConfig,
}

impl<'a> PaymentService<'a> {
    /// Creates a new PaymentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - HTTP client for processor requests
    /// - `config` - Processor credentials and platform fee
    ///
    /// # Returns
    /// - `PaymentService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a PaymentConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Starts paying for a client's booking.
    ///
    /// Charges the service price in the business's currency. A payment intent is
    /// created at the processor and the booking's payment row is created, or reset to
    /// `PENDING` when an earlier attempt did not succeed.
    ///
    /// # Arguments
    /// - `client_id` - Client paying; must own the booking
    /// - `booking_id` - Booking to pay for
    ///
    /// # Returns
    /// - `Ok(Checkout)` - Pending payment with the intent's client secret
    /// - `Err(AppError::NotFound)` - No such booking for this client
    /// - `Err(AppError::BadRequest)` - Booking cancelled or already paid, online payments
    ///   disabled, or nothing to charge
    /// - `Err(AppError::PaymentErr)` - Processor not configured or rejected the request
    pub async fn checkout(&self, client_id: i32, booking_id: i32) -> Result<Checkout, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .filter(|booking| booking.client_id == client_id)
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Cancelled bookings cannot be paid".to_string(),
            ));
        }

        let payment_repo = PaymentRepository::new(self.db);
        let existing = payment_repo.find_by_booking_id(booking.id).await?;
        if booking.is_paid
            || existing.is_some_and(|payment| payment.status == PaymentStatus::Succeeded)
        {
            return Err(AppError::BadRequest("Booking is already paid".to_string()));
        }

        let business = BusinessRepository::new(self.db)
            .find_by_id(booking.business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;
        if !business.settings.online_payments {
            return Err(AppError::BadRequest(
                "Online payments are disabled for this business".to_string(),
            ));
        }

        let service = ServiceRepository::new(self.db)
            .find_by_id(booking.service_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        if service.price_cents <= 0 {
            return Err(AppError::BadRequest(
                "This service has nothing to pay".to_string(),
            ));
        }

        let currency = business.settings.currency;
        let intent = PaymentGateway::new(self.http_client, self.config)
            .create_payment_intent(booking.id, service.price_cents, &currency)
            .await?;

        let payment = payment_repo
            .upsert_pending(UpsertPaymentParam {
                booking_id: booking.id,
                fees: FeeBreakdown::compute(service.price_cents, self.config.platform_fee_bps),
                currency,
                processor_payment_id: intent.id,
            })
            .await?;

        tracing::info!(
            "Started payment {} for booking {} ({} cents)",
            payment.id,
            booking.id,
            payment.fees.amount_cents
        );

        Ok(Checkout {
            payment,
            client_secret: intent.client_secret,
        })
    }

    /// Verifies and applies a webhook delivery from the processor.
    ///
    /// Events for processor ids without a payment row are logged and acknowledged.
    ///
    /// # Arguments
    /// - `payload` - Raw request body
    /// - `signature` - Value of the `Stripe-Signature` header, if present
    ///
    /// # Returns
    /// - `Ok(())` - Event verified and applied or ignored
    /// - `Err(PaymentError::NotConfigured)` - No webhook secret configured
    /// - `Err(PaymentError::InvalidSignature | StaleSignature)` - Verification failed
    /// - `Err(AppError::BadRequest)` - Verified body is not a readable event
    pub async fn handle_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<(), AppError> {
        let secret = self
            .config
            .webhook_secret
            .as_deref()
            .ok_or(PaymentError::NotConfigured("STRIPE_WEBHOOK_SECRET"))?;
        let signature = signature.ok_or_else(|| {
            PaymentError::InvalidSignature("missing Stripe-Signature header".to_string())
        })?;

        verify_signature(payload, signature, secret, Utc::now().timestamp())?;

        let event = parse_event(payload).map_err(|e| {
            tracing::warn!("Unreadable payment webhook payload: {}", e);
            AppError::BadRequest("Invalid webhook payload".to_string())
        })?;

        match event {
            WebhookEvent::PaymentSucceeded { payment_intent } => {
                self.apply(&payment_intent, PaymentStatus::Succeeded).await
            }
            WebhookEvent::PaymentFailed { payment_intent } => {
                self.apply(&payment_intent, PaymentStatus::Failed).await
            }
            WebhookEvent::ChargeRefunded { payment_intent } => {
                self.apply(&payment_intent, PaymentStatus::Refunded).await
            }
            WebhookEvent::Ignored { kind } => {
                tracing::debug!("Ignoring payment webhook event {}", kind);
                Ok(())
            }
        }
    }

    /// Sets a payment's status and mirrors it on the booking.
    async fn apply(&self, payment_intent: &str, status: PaymentStatus) -> Result<(), AppError> {
        let payment_repo = PaymentRepository::new(self.db);
        let Some(payment) = payment_repo.find_by_processor_id(payment_intent).await? else {
            tracing::warn!(
                "Payment webhook for unknown payment intent {}",
                payment_intent
            );
            return Ok(());
        };

        // A succeeded payment can only be refunded; a refunded one is final.
        let settled = match payment.status {
            PaymentStatus::Succeeded => status != PaymentStatus::Refunded,
            PaymentStatus::Refunded => true,
            PaymentStatus::Pending | PaymentStatus::Failed => false,
        };
        if settled {
            tracing::info!(
                "Ignoring {} event for payment {} which is already {}",
                status,
                payment.id,
                payment.status
            );
            return Ok(());
        }

        payment_repo.update_status(payment.id, status).await?;

        let booking_repo = BookingRepository::new(self.db);
        match status {
            PaymentStatus::Succeeded => {
                let booking = booking_repo.set_paid(payment.booking_id, true).await?;
                if booking.is_some_and(|b| b.status == BookingStatus::Pending) {
                    booking_repo
                        .update_status(payment.booking_id, BookingStatus::Confirmed)
                        .await?;
                }
            }
            PaymentStatus::Refunded => {
                booking_repo.set_paid(payment.booking_id, false).await?;
            }
            PaymentStatus::Pending | PaymentStatus::Failed => {}
        }

        tracing::info!(
            "Payment {} for booking {} is now {}",
            payment.id,
            payment.booking_id,
            status
        );

        Ok(())
    }

    /// Lists the payments of a business with totals over the succeeded ones.
    pub async fn revenue(&self, business_id: i32) -> Result<RevenueSummary, AppError> {
        let payments = PaymentRepository::new(self.db)
            .get_by_business(business_id)
            .await?;

        Ok(RevenueSummary::from_payments(payments))
    }

    /// Lists all payments with pagination.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPayments, AppError> {
        PaymentRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await
    }
}
