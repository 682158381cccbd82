//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! account creation, updates, queries by role and employer, and credential lookup,
//! converting entity models into domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::{
        error::AppError,
        model::user::{CreateUserParam, GetAllUsersParam, PaginatedUsers, UpdateUserParam, User},
        util::parse::total_pages,
    },
};

/// Repository providing database operations for account management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, deleting and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// The email is stored lowercased. Uniqueness is enforced by the database; callers
    /// check `email_exists` first to report a friendly error.
    ///
    /// # Arguments
    /// - `param` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email.to_lowercase()),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            business_id: ActiveValue::Set(param.business_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds an account by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that ID
    /// - `Err(AppError)` - Database error or unreadable stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds an account by email, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds an account together with its stored password hash.
    ///
    /// Only used to verify credentials during login.
    ///
    /// # Arguments
    /// - `email` - Email address as entered by the user
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - Account and its PHC formatted password hash
    /// - `Ok(None)` - No account with that email
    /// - `Err(AppError)` - Database error or unreadable stored role
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => {
                let hash = entity.password_hash.clone();
                Ok(Some((User::from_entity(entity)?, hash)))
            }
            None => Ok(None),
        }
    }

    /// Checks whether an account already uses this email, case-insensitively.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin account exists.
    ///
    /// Used at startup to decide whether the configured bootstrap admin must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admin exists yet
    /// - `Err(AppError::DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Updates the provided fields of an account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(AppError)` - Database error during update
    pub async fn update(&self, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(business_id) = param.business_id {
            active.business_id = ActiveValue::Set(Some(business_id));
        }
        if let Some(password_hash) = param.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Removes a worker from their business by clearing `business_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - The worker was attached to the business and is now detached
    /// - `Ok(false)` - No worker with that ID works at the business
    pub async fn detach_worker(&self, business_id: i32, worker_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(worker_id))
            .filter(entity::user::Column::Role.eq(Role::Worker.as_str()))
            .filter(entity::user::Column::BusinessId.eq(business_id))
            .col_expr(
                entity::user::Column::BusinessId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an account.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets accounts with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `param` - Page, page size and optional role filter
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Accounts for the requested page with totals
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        param: GetAllUsersParam,
    ) -> Result<PaginatedUsers, AppError> {
        let mut query = entity::prelude::User::find();
        if let Some(role) = param.role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(param.page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total_pages(total, param.per_page),
        })
    }

    /// Gets all workers employed by a business, ordered by name.
    pub async fn get_workers_by_business(&self, business_id: i32) -> Result<Vec<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Worker.as_str()))
            .filter(entity::user::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }
}
