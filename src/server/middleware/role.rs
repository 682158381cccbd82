//! Role gate middleware for the API route groups.
//!
//! Each gate reads the role claim from the session without touching the database
//! and rejects the request before it reaches a handler. Handlers still load the
//! user through `AuthGuard` for per-resource checks.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
    },
};

/// Roles allowed on `/api/admin`.
pub const ADMIN_ROLES: &[Role] = &[Role::Admin];
/// Roles allowed on `/api/business`.
pub const BUSINESS_ROLES: &[Role] = &[Role::BusinessOwner, Role::Admin];
/// Roles allowed on `/api/worker`.
pub const WORKER_ROLES: &[Role] = &[Role::Worker];
/// Roles allowed on `/api/client`.
pub const CLIENT_ROLES: &[Role] = &[Role::Client];

/// Checks the session's role claim against `allowed`.
///
/// # Returns
/// - `Ok(role)` - The claim is one of the allowed roles
/// - `Err(AuthError::UserNotInSession)` - No claim in the session (401)
/// - `Err(AuthError::AccessDenied)` - The claim is not allowed (403)
pub async fn check_role(session: &Session, allowed: &[Role]) -> Result<Role, AppError> {
    let auth_session = AuthSession::new(session);

    let (Some(user_id), Some(role)) =
        (auth_session.get_user_id().await?, auth_session.get_role().await?)
    else {
        return Err(AuthError::UserNotInSession.into());
    };

    if !allowed.contains(&role) {
        return Err(AuthError::AccessDenied(
            user_id,
            format!("Role {} is not allowed on this route", role),
        )
        .into());
    }

    Ok(role)
}

pub async fn require_admin(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_role(&session, ADMIN_ROLES).await?;
    Ok(next.run(request).await)
}

pub async fn require_business(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_role(&session, BUSINESS_ROLES).await?;
    Ok(next.run(request).await)
}

pub async fn require_worker(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_role(&session, WORKER_ROLES).await?;
    Ok(next.run(request).await)
}

pub async fn require_client(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_role(&session, CLIENT_ROLES).await?;
    Ok(next.run(request).await)
}
