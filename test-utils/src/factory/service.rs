//! Service factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test services with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::service::ServiceFactory;
///
/// let service = ServiceFactory::new(&db, business.id)
///     .duration_minutes(60)
///     .price_cents(4000)
///     .build()
///     .await?;
/// ```
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    name: String,
    description: Option<String>,
    duration_minutes: i32,
    price_cents: i64,
    active: bool,
}

impl<'a> ServiceFactory<'a> {
    /// Creates a new ServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"` where id is auto-incremented
    /// - duration_minutes: `30`
    /// - price_cents: `2500`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, business_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            business_id,
            name: format!("Service {}", id),
            description: None,
            duration_minutes: 30,
            price_cents: 2500,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the service entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::service::Model)` - Created service entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        entity::service::ActiveModel {
            id: ActiveValue::NotSet,
            business_id: ActiveValue::Set(self.business_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            price_cents: ActiveValue::Set(self.price_cents),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 30 minute service for a business.
pub async fn create_service(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, business_id).build().await
}
