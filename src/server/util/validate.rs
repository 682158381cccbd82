//! Input validation for account fields.
//!
//! Each check returns `AppError::BadRequest` with a message suitable for the client.

use crate::server::error::AppError;

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Checks that an email has a local part, an `@` and a dot somewhere after it.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .find('.')
                    .is_some_and(|dot| dot > 0 && dot < domain.len() - 1)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest(
            "A valid email address is required".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(())
}

/// Checks that a display name is not blank.
///
/// # Arguments
/// - `field` - Field name used in the error message, e.g. `"Name"`
/// - `value` - Submitted value
pub fn validate_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(())
}
