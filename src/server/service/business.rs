//! Business service for tenant management.
//!
//! This module provides the `BusinessService` for creating and maintaining businesses,
//! their settings, their staff and the list of clients who booked there.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{
            business::BusinessRepository, business_client::BusinessClientRepository,
            catalog::ServiceRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            business::{
                Business, BusinessDetail, BusinessSettings, CreateBusinessParam,
                PaginatedBusinesses, UpdateBusinessParam,
            },
            business_client::BusinessClient,
            user::{NewAccountParam, User},
        },
        service::user::UserService,
        util::validate::validate_not_blank,
    },
};

/// Service providing business logic for businesses and their staff.
pub struct BusinessService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BusinessService<'a> {
    /// Creates a new BusinessService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BusinessService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves businesses with pagination for public listings.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBusinesses, AppError> {
        BusinessRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await
    }

    /// Retrieves the businesses a user manages.
    ///
    /// Admins manage every business; owners only their own.
    pub async fn get_managed(&self, user: &User) -> Result<Vec<Business>, AppError> {
        let business_repo = BusinessRepository::new(self.db);

        if user.role == Role::Admin {
            business_repo.get_all().await
        } else {
            business_repo.get_by_owner(user.id).await
        }
    }

    /// Retrieves a business by ID.
    ///
    /// # Returns
    /// - `Ok(Business)` - Business found
    /// - `Err(AppError::NotFound)` - No business with that ID
    pub async fn get(&self, id: i32) -> Result<Business, AppError> {
        BusinessRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))
    }

    /// Retrieves a business with its active services and its workers.
    ///
    /// # Returns
    /// - `Ok(BusinessDetail)` - Business with catalog and staff
    /// - `Err(AppError::NotFound)` - No business with that ID
    pub async fn get_detail(&self, id: i32) -> Result<BusinessDetail, AppError> {
        let business = self.get(id).await?;
        let services = ServiceRepository::new(self.db)
            .get_by_business(id, true)
            .await?;
        let workers = UserRepository::new(self.db)
            .get_workers_by_business(id)
            .await?;

        Ok(BusinessDetail {
            business,
            services,
            workers,
        })
    }

    /// Creates a business.
    ///
    /// # Arguments
    /// - `param` - Owner, profile and settings of the business
    ///
    /// # Returns
    /// - `Ok(Business)` - The created business
    /// - `Err(AppError::BadRequest)` - Blank name, invalid settings, or the owner is not
    ///   a `BUSINESS_OWNER` account
    pub async fn create(&self, param: CreateBusinessParam) -> Result<Business, AppError> {
        validate_not_blank("Business name", &param.name)?;
        param.settings.validate()?;

        let owner = UserRepository::new(self.db).find_by_id(param.owner_id).await?;
        if !owner.is_some_and(|owner| owner.role == Role::BusinessOwner) {
            return Err(AppError::BadRequest(
                "Owner must be a business owner account".to_string(),
            ));
        }

        let business = BusinessRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Created business {} for owner {}",
            business.id,
            business.owner_id
        );

        Ok(business)
    }

    /// Updates the profile fields of a business.
    ///
    /// # Returns
    /// - `Ok(Business)` - The updated business
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::NotFound)` - No business with that ID
    pub async fn update(&self, param: UpdateBusinessParam) -> Result<Business, AppError> {
        validate_not_blank("Business name", &param.name)?;

        BusinessRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))
    }

    /// Replaces the settings of a business after validating them.
    pub async fn update_settings(
        &self,
        id: i32,
        settings: BusinessSettings,
    ) -> Result<Business, AppError> {
        settings.validate()?;

        BusinessRepository::new(self.db)
            .update_settings(id, &settings)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))
    }

    /// Deletes a business with its services, bookings and payments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BusinessRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Business not found".to_string()));
        }

        tracing::info!("Deleted business {}", id);

        Ok(())
    }

    /// Lists the workers employed by a business.
    pub async fn get_workers(&self, business_id: i32) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db)
            .get_workers_by_business(business_id)
            .await
    }

    /// Creates a worker account attached to a business.
    ///
    /// # Arguments
    /// - `param` - Account details; role and business are set by the caller
    ///
    /// # Returns
    /// - `Ok(User)` - The created worker
    /// - `Err(AppError::BadRequest)` - Validation failed or the email is taken
    pub async fn add_worker(&self, param: NewAccountParam) -> Result<User, AppError> {
        UserService::new(self.db).create_account(param).await
    }

    /// Detaches a worker from a business. The account itself is kept.
    ///
    /// # Returns
    /// - `Ok(())` - Worker detached
    /// - `Err(AppError::NotFound)` - The worker does not work at this business
    pub async fn remove_worker(&self, business_id: i32, worker_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db)
            .detach_worker(business_id, worker_id)
            .await?
        {
            return Err(AppError::NotFound("Worker not found".to_string()));
        }

        Ok(())
    }

    /// Lists the clients who have booked at a business.
    pub async fn get_clients(&self, business_id: i32) -> Result<Vec<BusinessClient>, AppError> {
        BusinessClientRepository::new(self.db)
            .get_by_business(business_id)
            .await
    }
}
