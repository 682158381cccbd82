use crate::{
    model::{booking::BookingStatus, payment::PaymentStatus, user::Role},
    server::error::{internal::InternalError, AppError},
};

/// Parses a role stored in the database
///
/// # Arguments
/// - `value` - The stored role string
///
/// # Returns
/// - `Ok(Role)` - Successfully parsed role
/// - `Err(AppError::InternalErr(ParseRole))` - Stored value is not a known role
pub fn parse_role(value: &str) -> Result<Role, AppError> {
    let role = value
        .parse::<Role>()
        .map_err(InternalError::ParseRole)?;

    Ok(role)
}

/// Parses a booking status stored in the database
pub fn parse_booking_status(value: &str) -> Result<BookingStatus, AppError> {
    let status = value
        .parse::<BookingStatus>()
        .map_err(|value| InternalError::ParseStatus {
            kind: "booking",
            value,
        })?;

    Ok(status)
}

/// Parses a payment status stored in the database
pub fn parse_payment_status(value: &str) -> Result<PaymentStatus, AppError> {
    let status = value
        .parse::<PaymentStatus>()
        .map_err(|value| InternalError::ParseStatus {
            kind: "payment",
            value,
        })?;

    Ok(status)
}

/// Computes the number of pages needed to show `total` items.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }

    total.div_ceil(per_page)
}
