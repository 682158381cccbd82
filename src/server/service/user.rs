//! User service for account management.
//!
//! This module provides the `UserService` for creating accounts with validated,
//! hashed credentials and for the admin user management operations.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        CreateUserParam, GetAllUsersParam, NewAccountParam, PaginatedUsers, UpdateUserParam, User,
    },
    util::{
        password::hash_password,
        validate::{validate_email, validate_not_blank, validate_password},
    },
};

/// Service providing business logic for account management.
///
/// This struct holds a reference to the database connection and provides methods
/// for account creation, queries, updates and deletion.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account after validating its fields.
    ///
    /// The email must look like an address and not be in use (case-insensitively),
    /// the password must be at least 8 characters and the name must not be blank.
    ///
    /// # Arguments
    /// - `param` - Account details with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Validation failed or the email is already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_account(&self, param: NewAccountParam) -> Result<User, AppError> {
        let email = param.email.trim().to_lowercase();
        validate_email(&email)?;
        validate_password(&param.password)?;
        validate_not_blank("Name", &param.name)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&email).await? {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&param.password)?;

        user_repo
            .create(CreateUserParam {
                email,
                password_hash,
                name: param.name.trim().to_string(),
                phone: param.phone,
                role: param.role,
                business_id: param.business_id,
            })
            .await
    }

    /// Retrieves an account by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - Account found
    /// - `Err(AppError::NotFound)` - No account with that ID
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Retrieves accounts with pagination and an optional role filter.
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        UserRepository::new(self.db).get_all_paginated(param).await
    }

    /// Updates an account on behalf of an admin.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::BadRequest)` - A provided name is blank
    /// - `Err(AppError::NotFound)` - No account with that ID
    pub async fn update_user(&self, param: UpdateUserParam) -> Result<User, AppError> {
        if let Some(name) = &param.name {
            validate_not_blank("Name", name)?;
        }

        UserRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes an account.
    ///
    /// Admins cannot delete their own account so the application always keeps
    /// the admin performing the operation.
    ///
    /// # Arguments
    /// - `actor_id` - ID of the admin performing the deletion
    /// - `id` - ID of the account to delete
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted along with dependent records
    /// - `Err(AppError::BadRequest)` - Attempted to delete own account
    /// - `Err(AppError::NotFound)` - No account with that ID
    pub async fn delete_user(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        if actor_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
