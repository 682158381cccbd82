//! Credential authentication service.
//!
//! Handles self-registration of client accounts, email/password login and
//! profile updates of the logged in user. Session handling stays in the controller.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{NewAccountParam, UpdateProfileParam, UpdateUserParam, User},
    service::user::UserService,
    util::{
        password::{hash_password, verify_password},
        validate::{validate_not_blank, validate_password},
    },
};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new client account.
    ///
    /// # Arguments
    /// - `param` - Account details; the role is always `CLIENT`
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Validation failed or the email is taken
    pub async fn register(&self, param: NewAccountParam) -> Result<User, AppError> {
        let user = UserService::new(self.db).create_account(param).await?;

        tracing::info!("Registered client account {}", user.id);

        Ok(user)
    }

    /// Verifies email and password.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(email.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Updates the profile of the logged in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::BadRequest)` - Blank name or too short password
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The account was deleted meanwhile
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        if let Some(name) = &param.name {
            validate_not_blank("Name", name)?;
        }
        let password_hash = match &param.password {
            Some(password) => {
                validate_password(password)?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        UserRepository::new(self.db)
            .update(UpdateUserParam {
                id: user_id,
                name: param.name.map(|n| n.trim().to_string()),
                phone: param.phone,
                password_hash,
                ..Default::default()
            })
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
