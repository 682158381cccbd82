use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request did not come from a logged in user. Results in a 401 Unauthorized
    /// response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The user id stored in the session no longer exists.
    ///
    /// Occurs when an account is deleted while its session is still alive. Results in
    /// a 401 Unauthorized response.
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(i32),

    /// Email and password do not match any account.
    ///
    /// The same variant is used for unknown emails and wrong passwords so the response
    /// does not reveal which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the permission required for the operation.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Description of the failed check, logged but not returned
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Authentication required"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden with "Access denied"
///
/// Details are logged at debug level while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        error_response(status, message.to_string())
    }
}
