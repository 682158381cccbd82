//! Business fixtures for creating in-memory test data.

use chrono::Utc;
use entity::business;

use crate::factory::business::DEFAULT_SETTINGS;

/// Default test business name.
pub const DEFAULT_NAME: &str = "Test Barbershop";

/// Creates a business entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - owner_id: `1`
/// - name: `"Test Barbershop"`
/// - settings: the factory's default settings JSON
pub fn entity() -> business::Model {
    entity_builder().build()
}

/// Creates a business entity builder for customizing fixture values.
pub fn entity_builder() -> BusinessEntityBuilder {
    let now = Utc::now();
    BusinessEntityBuilder {
        model: business::Model {
            id: 1,
            owner_id: 1,
            name: DEFAULT_NAME.to_string(),
            description: None,
            address: None,
            phone: None,
            settings: DEFAULT_SETTINGS.to_string(),
            created_at: now,
            updated_at: now,
        },
    }
}

/// Builder for business entity fixtures.
pub struct BusinessEntityBuilder {
    model: business::Model,
}

impl BusinessEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    /// Sets the raw settings column, which may be partial or invalid JSON.
    pub fn settings(mut self, settings: impl Into<String>) -> Self {
        self.model.settings = settings.into();
        self
    }

    pub fn build(self) -> business::Model {
        self.model
    }
}
