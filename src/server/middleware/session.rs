//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the
//! authentication claims the application stores: the logged in user's id and their
//! role. Keeping the keys here prevents typos and keeps the claim format in one place.

use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{error::AppError, util::parse::parse_role},
};

// Session key constants
pub const SESSION_AUTH_USER_ID: &str = "auth:user";
pub const SESSION_AUTH_ROLE: &str = "auth:role";

/// Authentication session management.
///
/// Handles the authenticated user's id and role claim and the session lifecycle
/// operations performed on login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id and role claim in the session.
    ///
    /// Called after successful login or registration to establish a logged-in session.
    ///
    /// # Arguments
    /// - `user_id` - The user's id
    /// - `role` - The user's role, checked by the role gate middleware
    ///
    /// # Returns
    /// - `Ok(())` - Claims successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user_id: i32, role: Role) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        self.session
            .insert(SESSION_AUTH_ROLE, role.as_str().to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged in user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Retrieves the role claim from the session.
    ///
    /// # Returns
    /// - `Ok(Some(role))` - A role claim is stored
    /// - `Ok(None)` - No role claim (not logged in)
    /// - `Err(AppError::InternalErr(ParseRole))` - The stored claim is not a known role
    pub async fn get_role(&self) -> Result<Option<Role>, AppError> {
        let Some(role) = self.session.get::<String>(SESSION_AUTH_ROLE).await? else {
            return Ok(None);
        };

        Ok(Some(parse_role(&role)?))
    }

    /// Issues a new session id while keeping the session data.
    ///
    /// Called on login so a session id known before authentication cannot be reused.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Deletes the session and its data from the store.
    ///
    /// Used during logout.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
