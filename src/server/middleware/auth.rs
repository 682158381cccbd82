use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        data::{business::BusinessRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::{business::Business, user::User},
    },
};

pub enum Permission {
    /// Caller must be an admin.
    Admin,
    /// Caller must have exactly this role.
    Role(Role),
    /// Caller must own the business, or be an admin.
    ManageBusiness(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged in user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller satisfies all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's account no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    /// - `Err(AppError::NotFound)` - A referenced business does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Role(role) => {
                    if user.role != *role {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("Operation requires role {} but user has {}", role, user.role),
                        )
                        .into());
                    }
                }
                Permission::ManageBusiness(business_id) => {
                    self.require_business_access(&user, *business_id).await?;
                }
            }
        }

        Ok(user)
    }

    /// Loads a business the user may manage.
    ///
    /// # Returns
    /// - `Ok(Business)` - The user owns the business or is an admin
    /// - `Err(AppError::NotFound)` - No business with that ID
    /// - `Err(AuthError::AccessDenied)` - The business belongs to someone else
    pub async fn require_business_access(
        &self,
        user: &User,
        business_id: i32,
    ) -> Result<Business, AppError> {
        let business = BusinessRepository::new(self.db)
            .find_by_id(business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        if user.role != Role::Admin && business.owner_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User does not manage business {}", business_id),
            )
            .into());
        }

        Ok(business)
    }
}
