//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation, fast password hashing and convenience methods for
//! creating entities with their dependencies.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{business::create_business, service::create_service, user::UserFactory};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a password with minimal Argon2id cost.
///
/// The parameters are embedded in the PHC string, so the application's verifier
/// accepts these hashes while tests stay fast.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(DbErr::Custom)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, DbErr> {
    let params = Params::new(8, 1, 1, None).map_err(|e| DbErr::Custom(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(e.to_string()))
}

/// Entities created by `create_business_with_dependencies`.
pub struct BusinessWithDependencies {
    pub owner: entity::user::Model,
    pub business: entity::business::Model,
    pub worker: entity::user::Model,
    pub service: entity::service::Model,
}

/// Creates a business together with the accounts and service needed to book there.
///
/// This is a convenience method that creates:
/// 1. User (as business owner)
/// 2. Business
/// 3. User (as worker employed by the business)
/// 4. Service (30 minutes, 2500 cents)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(BusinessWithDependencies)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_business_with_dependencies(
    db: &DatabaseConnection,
) -> Result<BusinessWithDependencies, DbErr> {
    let owner = UserFactory::new(db).role("BUSINESS_OWNER").build().await?;
    let business = create_business(db, owner.id).await?;
    let worker = UserFactory::new(db)
        .role("WORKER")
        .business_id(Some(business.id))
        .build()
        .await?;
    let service = create_service(db, business.id).await?;

    Ok(BusinessWithDependencies {
        owner,
        business,
        worker,
        service,
    })
}
