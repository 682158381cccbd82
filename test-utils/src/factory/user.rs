//! Accounts of every role, stored with a cheap argon2 hash of a known password.

use crate::factory::helpers::{hash_password, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password every factory-created account can log in with.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Builder for an account row. Unset fields get unique defaults.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("owner@example.com")
///     .role("BUSINESS_OWNER")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    name: String,
    phone: Option<String>,
    role: String,
    business_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// A CLIENT named `User {n}` with email `user{n}@example.com` and `DEFAULT_PASSWORD`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            name: format!("User {}", id),
            phone: None,
            role: "CLIENT".to_string(),
            business_id: None,
        }
    }

    /// Lowercased, as registration stores it.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into().to_lowercase();
        self
    }

    /// Sets the plaintext password that will be hashed on insert.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// One of `ADMIN`, `BUSINESS_OWNER`, `WORKER`, `CLIENT`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the employing business (workers only).
    pub fn business_id(mut self, business_id: Option<i32>) -> Self {
        self.business_id = business_id;
        self
    }

    /// Hashes the password and inserts the row.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(hash_password(&self.password)?),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            role: ActiveValue::Set(self.role),
            business_id: ActiveValue::Set(self.business_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a default CLIENT.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Inserts a default account with `role`, e.g. `"WORKER"`.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
