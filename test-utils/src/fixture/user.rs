//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::user;

/// Default test email.
pub const DEFAULT_EMAIL: &str = "client@example.com";

/// Default test name.
pub const DEFAULT_NAME: &str = "Test Client";

/// Default role.
pub const DEFAULT_ROLE: &str = "CLIENT";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"client@example.com"`
/// - password_hash: placeholder, not a valid PHC string
/// - name: `"Test Client"`
/// - role: `"CLIENT"`
/// - business_id: `None`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let user = fixture::user::entity();
/// assert_eq!(user.role, "CLIENT");
/// ```
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customizing fixture values.
pub fn entity_builder() -> UserEntityBuilder {
    let now = Utc::now();
    UserEntityBuilder {
        model: user::Model {
            id: 1,
            email: DEFAULT_EMAIL.to_string(),
            password_hash: "not-a-hash".to_string(),
            name: DEFAULT_NAME.to_string(),
            phone: None,
            role: DEFAULT_ROLE.to_string(),
            business_id: None,
            created_at: now,
            updated_at: now,
        },
    }
}

/// Builder for user entity fixtures.
pub struct UserEntityBuilder {
    model: user::Model,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.model.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.model.role = role.into();
        self
    }

    pub fn business_id(mut self, business_id: Option<i32>) -> Self {
        self.model.business_id = business_id;
        self
    }

    pub fn build(self) -> user::Model {
        self.model
    }
}
