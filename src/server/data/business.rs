//! Business data repository.
//!
//! Provides the `BusinessRepository` for managing business records, including the
//! JSON encoded settings column.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::business::{
        Business, BusinessSettings, CreateBusinessParam, PaginatedBusinesses, UpdateBusinessParam,
    },
    util::parse::total_pages,
};

/// Repository providing database operations for businesses.
pub struct BusinessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessRepository<'a> {
    /// Creates a new BusinessRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BusinessRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new business
    ///
    /// # Arguments
    /// - `param` - Owner, profile fields and initial settings
    ///
    /// # Returns
    /// - `Ok(Business)` - The created business
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateBusinessParam) -> Result<Business, AppError> {
        let now = Utc::now();

        let entity = entity::business::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            address: ActiveValue::Set(param.address),
            phone: ActiveValue::Set(param.phone),
            settings: ActiveValue::Set(param.settings.to_json()?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Business::from_entity(entity)
    }

    /// Finds a business by ID
    ///
    /// # Returns
    /// - `Ok(Some(Business))` - Business found
    /// - `Ok(None)` - No business with that ID
    /// - `Err(AppError)` - Database error or malformed settings
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Business>, AppError> {
        let entity = entity::prelude::Business::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Business::from_entity).transpose()
    }

    /// Gets all businesses owned by an account, ordered by name.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Business>, AppError> {
        entity::prelude::Business::find()
            .filter(entity::business::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::business::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Business::from_entity)
            .collect()
    }

    /// Gets every business, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Business>, AppError> {
        entity::prelude::Business::find()
            .order_by_asc(entity::business::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Business::from_entity)
            .collect()
    }

    /// Gets businesses with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of businesses per page
    ///
    /// # Returns
    /// - `Ok(PaginatedBusinesses)` - Businesses for the requested page with totals
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBusinesses, AppError> {
        let paginator = entity::prelude::Business::find()
            .order_by_asc(entity::business::Column::Name)
            .order_by_asc(entity::business::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let businesses = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Business::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedBusinesses {
            businesses,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates the profile fields of a business.
    ///
    /// # Returns
    /// - `Ok(Some(Business))` - The updated business
    /// - `Ok(None)` - No business with that ID
    pub async fn update(&self, param: UpdateBusinessParam) -> Result<Option<Business>, AppError> {
        let Some(entity) = entity::prelude::Business::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::business::ActiveModel = entity.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.address = ActiveValue::Set(param.address);
        active.phone = ActiveValue::Set(param.phone);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Business::from_entity(entity)?))
    }

    /// Replaces the settings of a business.
    ///
    /// # Returns
    /// - `Ok(Some(Business))` - The business with its new settings
    /// - `Ok(None)` - No business with that ID
    pub async fn update_settings(
        &self,
        id: i32,
        settings: &BusinessSettings,
    ) -> Result<Option<Business>, AppError> {
        let Some(entity) = entity::prelude::Business::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::business::ActiveModel = entity.into();
        active.settings = ActiveValue::Set(settings.to_json()?);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Business::from_entity(entity)?))
    }

    /// Deletes a business and, through cascading foreign keys, its services,
    /// bookings and client links.
    ///
    /// # Returns
    /// - `Ok(true)` - Business deleted
    /// - `Ok(false)` - No business with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Business::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
