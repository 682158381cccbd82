//! Startup seeding of the admin account and optional demo data.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{business::BusinessRepository, catalog::ServiceRepository, user::UserRepository},
        error::AppError,
        model::{
            business::{BusinessSettings, CreateBusinessParam},
            catalog::CreateServiceParam,
            user::{NewAccountParam, User},
        },
        service::user::UserService,
    },
};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

pub struct SeedService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the first admin account when none exists.
    ///
    /// # Arguments
    /// - `email` - `ADMIN_EMAIL`, if configured
    /// - `password` - `ADMIN_PASSWORD`, if configured
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin account was created
    /// - `Ok(None)` - An admin already exists, credentials are not configured, or they
    ///   were rejected (taken email, weak password); the reason is logged
    pub async fn bootstrap_admin(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(None);
        }

        let (Some(email), Some(password)) = (email, password) else {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
            );
            return Ok(None);
        };

        let created = UserService::new(self.db)
            .create_account(NewAccountParam {
                email: email.to_string(),
                password: password.to_string(),
                name: "Administrator".to_string(),
                phone: None,
                role: Role::Admin,
                business_id: None,
            })
            .await;
        let admin = match created {
            Ok(admin) => admin,
            Err(AppError::BadRequest(reason)) => {
                tracing::warn!("Could not create admin account {}: {}", email, reason);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        tracing::info!("Created admin account {}", admin.email);

        Ok(Some(admin))
    }

    /// Inserts a demo business with staff, services and a client.
    ///
    /// Does nothing when any business already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Demo data was inserted
    /// - `Ok(false)` - The database already has businesses
    pub async fn seed_demo_data(&self) -> Result<bool, AppError> {
        let business_repo = BusinessRepository::new(self.db);
        if business_repo.get_all_paginated(0, 1).await?.total > 0 {
            return Ok(false);
        }

        let user_service = UserService::new(self.db);
        let account = |email: &str, name: &str, role: Role, business_id: Option<i32>| {
            NewAccountParam {
                email: email.to_string(),
                password: DEMO_PASSWORD.to_string(),
                name: name.to_string(),
                phone: None,
                role,
                business_id,
            }
        };

        let owner = user_service
            .create_account(account(
                "owner@barberbook.local",
                "Olivia Owner",
                Role::BusinessOwner,
                None,
            ))
            .await?;

        let business = business_repo
            .create(CreateBusinessParam {
                owner_id: owner.id,
                name: "Sharp Lines Barbershop".to_string(),
                description: Some("Classic cuts, fades and hot towel shaves.".to_string()),
                address: Some("12 Market Street".to_string()),
                phone: Some("+1 555 0100".to_string()),
                settings: BusinessSettings::default(),
            })
            .await?;

        for (email, name) in [
            ("marco@barberbook.local", "Marco Fade"),
            ("nina@barberbook.local", "Nina Shears"),
        ] {
            user_service
                .create_account(account(email, name, Role::Worker, Some(business.id)))
                .await?;
        }

        let service_repo = ServiceRepository::new(self.db);
        for (name, duration_minutes, price_cents) in [
            ("Classic Haircut", 30, 2500),
            ("Skin Fade", 45, 3500),
            ("Beard Trim", 15, 1200),
        ] {
            service_repo
                .create(CreateServiceParam {
                    business_id: business.id,
                    name: name.to_string(),
                    description: None,
                    duration_minutes,
                    price_cents,
                })
                .await?;
        }

        user_service
            .create_account(account(
                "client@barberbook.local",
                "Chris Client",
                Role::Client,
                None,
            ))
            .await?;

        tracing::info!("Seeded demo business {}", business.id);

        Ok(true)
    }
}
