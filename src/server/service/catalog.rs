//! Service catalog management for a business.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::ServiceRepository,
    error::AppError,
    model::catalog::{CreateServiceParam, Service, UpdateServiceParam},
    util::validate::validate_not_blank,
};

/// Longest bookable service, one full day.
const MAX_DURATION_MINUTES: i32 = 24 * 60;
/// Largest amount the payment processor accepts for a single charge.
const MAX_PRICE_CENTS: i64 = 99_999_999;

pub struct CatalogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every service of a business, including inactive ones.
    pub async fn list(&self, business_id: i32) -> Result<Vec<Service>, AppError> {
        ServiceRepository::new(self.db)
            .get_by_business(business_id, false)
            .await
    }

    /// Adds a service to a business's catalog.
    ///
    /// # Returns
    /// - `Ok(Service)` - The created, active service
    /// - `Err(AppError::BadRequest)` - Blank name, non-positive duration or negative price
    pub async fn create(&self, param: CreateServiceParam) -> Result<Service, AppError> {
        validate_service(&param.name, param.duration_minutes, param.price_cents)?;

        ServiceRepository::new(self.db).create(param).await
    }

    /// Updates a service of a business.
    ///
    /// # Arguments
    /// - `business_id` - Business the service must belong to
    /// - `param` - New values for the service
    ///
    /// # Returns
    /// - `Ok(Service)` - The updated service
    /// - `Err(AppError::BadRequest)` - Invalid values
    /// - `Err(AppError::NotFound)` - No such service at this business
    pub async fn update(
        &self,
        business_id: i32,
        param: UpdateServiceParam,
    ) -> Result<Service, AppError> {
        validate_service(&param.name, param.duration_minutes, param.price_cents)?;
        self.get_owned(business_id, param.id).await?;

        ServiceRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(service_not_found)
    }

    /// Deletes a service of a business together with its bookings.
    pub async fn delete(&self, business_id: i32, service_id: i32) -> Result<(), AppError> {
        self.get_owned(business_id, service_id).await?;
        ServiceRepository::new(self.db).delete(service_id).await?;

        Ok(())
    }

    async fn get_owned(&self, business_id: i32, service_id: i32) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .find_by_id(service_id)
            .await?
            .filter(|s| s.business_id == business_id)
            .ok_or_else(service_not_found)
    }
}

fn service_not_found() -> AppError {
    AppError::NotFound("Service not found".to_string())
}

fn validate_service(name: &str, duration_minutes: i32, price_cents: i64) -> Result<(), AppError> {
    validate_not_blank("Service name", name)?;

    if duration_minutes <= 0 || duration_minutes > MAX_DURATION_MINUTES {
        return Err(AppError::BadRequest(format!(
            "Duration must be between 1 and {} minutes",
            MAX_DURATION_MINUTES
        )));
    }
    if price_cents < 0 {
        return Err(AppError::BadRequest("Price cannot be negative".to_string()));
    }
    if price_cents > MAX_PRICE_CENTS {
        return Err(AppError::BadRequest(format!(
            "Price cannot exceed {} minor units",
            MAX_PRICE_CENTS
        )));
    }

    Ok(())
}
