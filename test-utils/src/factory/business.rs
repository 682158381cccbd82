//! Business factory for creating test business entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Settings JSON matching the application's defaults.
pub const DEFAULT_SETTINGS: &str = r#"{"opening_hour":9,"closing_hour":18,"cancellation_window_hours":0,"online_payments":true,"currency":"usd"}"#;

/// Factory for creating test businesses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::business::BusinessFactory;
///
/// let business = BusinessFactory::new(&db, owner.id)
///     .name("Fade Street")
///     .settings(r#"{"opening_hour":0,"closing_hour":24}"#)
///     .build()
///     .await?;
/// ```
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    settings: String,
}

impl<'a> BusinessFactory<'a> {
    /// Creates a new BusinessFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Business {id}"` where id is auto-incremented
    /// - description, address, phone: `None`
    /// - settings: `DEFAULT_SETTINGS`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning account
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Business {}", id),
            description: None,
            address: None,
            phone: None,
            settings: DEFAULT_SETTINGS.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Sets the raw settings JSON stored for the business.
    pub fn settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = settings.into();
        self
    }

    /// Builds and inserts the business entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::business::Model)` - Created business entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::business::Model, DbErr> {
        let now = Utc::now();
        entity::business::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            settings: ActiveValue::Set(self.settings),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a business with default values owned by `owner_id`.
pub async fn create_business(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db, owner_id).build().await
}
