//! Payment domain models and fee arithmetic.

use chrono::{DateTime, Utc};

use crate::{
    model::payment::{CheckoutDto, PaginatedPaymentsDto, PaymentDto, PaymentStatus, RevenueSummaryDto},
    server::{error::AppError, util::parse::parse_payment_status},
};

/// Percentage part of the processor fee, in basis points (2.9%).
pub const PROCESSOR_FEE_BPS: i64 = 290;
/// Fixed part of the processor fee per charge, in minor units.
pub const PROCESSOR_FEE_FIXED_CENTS: i64 = 30;

/// Split of a charged amount between processor, platform and business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub amount_cents: i64,
    pub platform_fee_cents: i64,
    pub processor_fee_cents: i64,
    pub net_amount_cents: i64,
}

impl FeeBreakdown {
    /// Computes fees for `amount_cents` with the given platform fee.
    ///
    /// Percentages round half-up. Fees are capped so the business never ends up with
    /// a negative net amount: the processor fee is taken first, the platform fee gets
    /// whatever remains up to its computed value.
    pub fn compute(amount_cents: i64, platform_fee_bps: u32) -> Self {
        let amount = amount_cents.max(0);

        let processor_fee = apply_bps(amount, PROCESSOR_FEE_BPS)
            .saturating_add(PROCESSOR_FEE_FIXED_CENTS)
            .min(amount);
        let platform_fee = apply_bps(amount, platform_fee_bps as i64).min(amount - processor_fee);

        Self {
            amount_cents: amount,
            platform_fee_cents: platform_fee,
            processor_fee_cents: processor_fee,
            net_amount_cents: amount - processor_fee - platform_fee,
        }
    }
}

/// Rounds `amount * bps / 10_000` half-up, widened so large amounts cannot overflow.
fn apply_bps(amount: i64, bps: i64) -> i64 {
    let fee = (amount as i128 * bps as i128 + 5_000) / 10_000;
    i64::try_from(fee).unwrap_or(i64::MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub booking_id: i32,
    pub fees: FeeBreakdown,
    pub currency: String,
    pub status: PaymentStatus,
    pub processor_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            booking_id: self.booking_id,
            amount_cents: self.fees.amount_cents,
            platform_fee_cents: self.fees.platform_fee_cents,
            processor_fee_cents: self.fees.processor_fee_cents,
            net_amount_cents: self.fees.net_amount_cents,
            currency: self.currency,
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a payment domain model at the repository boundary.
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, AppError> {
        let status = parse_payment_status(&entity.status)?;

        Ok(Self {
            id: entity.id,
            booking_id: entity.booking_id,
            fees: FeeBreakdown {
                amount_cents: entity.amount_cents,
                platform_fee_cents: entity.platform_fee_cents,
                processor_fee_cents: entity.processor_fee_cents,
                net_amount_cents: entity.net_amount_cents,
            },
            currency: entity.currency,
            status,
            processor_payment_id: entity.processor_payment_id,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording a payment attempt for a booking.
#[derive(Debug, Clone)]
pub struct UpsertPaymentParam {
    pub booking_id: i32,
    pub fees: FeeBreakdown,
    pub currency: String,
    pub processor_payment_id: String,
}

/// Payment attempt started by a client together with the processor's client secret.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    pub payment: Payment,
    pub client_secret: String,
}

impl Checkout {
    pub fn into_dto(self) -> CheckoutDto {
        CheckoutDto {
            payment: self.payment.into_dto(),
            client_secret: self.client_secret,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPayments {
    pub payments: Vec<Payment>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPayments {
    pub fn into_dto(self) -> PaginatedPaymentsDto {
        PaginatedPaymentsDto {
            payments: self.payments.into_iter().map(Payment::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Payments of one business with totals over the succeeded ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub payments: Vec<Payment>,
    pub gross_cents: i64,
    pub platform_fee_cents: i64,
    pub processor_fee_cents: i64,
    pub net_cents: i64,
}

impl RevenueSummary {
    pub fn from_payments(payments: Vec<Payment>) -> Self {
        let succeeded = payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Succeeded);

        let (mut gross, mut platform, mut processor, mut net) = (0, 0, 0, 0);
        for payment in succeeded {
            gross += payment.fees.amount_cents;
            platform += payment.fees.platform_fee_cents;
            processor += payment.fees.processor_fee_cents;
            net += payment.fees.net_amount_cents;
        }

        Self {
            payments,
            gross_cents: gross,
            platform_fee_cents: platform,
            processor_fee_cents: processor,
            net_cents: net,
        }
    }

    pub fn into_dto(self) -> RevenueSummaryDto {
        RevenueSummaryDto {
            payments: self.payments.into_iter().map(Payment::into_dto).collect(),
            gross_cents: self.gross_cents,
            platform_fee_cents: self.platform_fee_cents,
            processor_fee_cents: self.processor_fee_cents,
            net_cents: self.net_cents,
        }
    }
}
