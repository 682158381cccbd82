//! Service catalog repository.
//!
//! Provides the `ServiceRepository` for the services a business offers.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::catalog::{CreateServiceParam, Service, UpdateServiceParam},
};

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new, active service
    ///
    /// # Arguments
    /// - `param` - Business, name, duration and price of the service
    ///
    /// # Returns
    /// - `Ok(Service)` - The created service
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateServiceParam) -> Result<Service, AppError> {
        let entity = entity::service::ActiveModel {
            business_id: ActiveValue::Set(param.business_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            duration_minutes: ActiveValue::Set(param.duration_minutes),
            price_cents: ActiveValue::Set(param.price_cents),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Service::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Service>, AppError> {
        let entity = entity::prelude::Service::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Service::from_entity))
    }

    /// Gets the services of a business, ordered by name.
    ///
    /// # Arguments
    /// - `business_id` - Business offering the services
    /// - `active_only` - Skip services the business has deactivated
    pub async fn get_by_business(
        &self,
        business_id: i32,
        active_only: bool,
    ) -> Result<Vec<Service>, AppError> {
        let mut query = entity::prelude::Service::find()
            .filter(entity::service::Column::BusinessId.eq(business_id));
        if active_only {
            query = query.filter(entity::service::Column::Active.eq(true));
        }

        let entities = query
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Service::from_entity).collect())
    }

    /// Updates a service
    ///
    /// # Returns
    /// - `Ok(Some(Service))` - The updated service
    /// - `Ok(None)` - No service with that ID
    pub async fn update(&self, param: UpdateServiceParam) -> Result<Option<Service>, AppError> {
        let Some(entity) = entity::prelude::Service::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::service::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.duration_minutes = ActiveValue::Set(param.duration_minutes);
        active.price_cents = ActiveValue::Set(param.price_cents);
        active.active = ActiveValue::Set(param.active);

        let entity = active.update(self.db).await?;

        Ok(Some(Service::from_entity(entity)))
    }

    /// Deletes a service along with its bookings.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
