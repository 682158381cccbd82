//! Business domain models and parameters.
//!
//! A business is the tenant of the application: it is owned by a `BUSINESS_OWNER`
//! account, offers services, employs workers and receives bookings. Per-business
//! settings are stored as JSON and decoded into `BusinessSettings` here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::business::{
        AdminCreateBusinessDto, BusinessDetailDto, BusinessDto, BusinessSettingsDto,
        CreateBusinessDto, PaginatedBusinessesDto, UpdateBusinessDto, WorkerDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::{catalog::Service, user::User},
    },
};

/// Booking rules configured by a business owner.
///
/// Missing keys in stored JSON fall back to their defaults so settings written by
/// older versions remain readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessSettings {
    pub opening_hour: u8,
    pub closing_hour: u8,
    pub cancellation_window_hours: u32,
    pub online_payments: bool,
    pub currency: String,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            opening_hour: 9,
            closing_hour: 18,
            cancellation_window_hours: 0,
            online_payments: true,
            currency: "usd".to_string(),
        }
    }
}

impl BusinessSettings {
    pub fn from_dto(dto: BusinessSettingsDto) -> Self {
        Self {
            opening_hour: dto.opening_hour,
            closing_hour: dto.closing_hour,
            cancellation_window_hours: dto.cancellation_window_hours,
            online_payments: dto.online_payments,
            currency: dto.currency.to_lowercase(),
        }
    }

    pub fn into_dto(self) -> BusinessSettingsDto {
        BusinessSettingsDto {
            opening_hour: self.opening_hour,
            closing_hour: self.closing_hour,
            cancellation_window_hours: self.cancellation_window_hours,
            online_payments: self.online_payments,
            currency: self.currency,
        }
    }

    /// Checks that opening hours form a non-empty range within a day and the
    /// currency is a three letter code.
    ///
    /// # Returns
    /// - `Ok(())` - Settings are usable
    /// - `Err(AppError::BadRequest)` - Describes the first invalid field
    pub fn validate(&self) -> Result<(), AppError> {
        if self.opening_hour > 23 {
            return Err(AppError::BadRequest(
                "Opening hour must be between 0 and 23".to_string(),
            ));
        }
        if self.closing_hour > 24 || self.closing_hour <= self.opening_hour {
            return Err(AppError::BadRequest(
                "Closing hour must be after the opening hour and at most 24".to_string(),
            ));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::BadRequest(
                "Currency must be a three letter ISO code".to_string(),
            ));
        }

        Ok(())
    }

    /// Serializes the settings for storage in the `business.settings` column.
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|e| AppError::InternalError(format!("Failed to encode settings: {}", e)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub settings: BusinessSettings,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn into_dto(self) -> BusinessDto {
        BusinessDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            address: self.address,
            phone: self.phone,
            settings: self.settings.into_dto(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a business domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Business)` - The converted business
    /// - `Err(AppError::InternalErr(SettingsFormat))` - Stored settings are not valid JSON
    pub fn from_entity(entity: entity::business::Model) -> Result<Self, AppError> {
        let settings = serde_json::from_str::<BusinessSettings>(&entity.settings).map_err(
            |source| InternalError::SettingsFormat {
                business_id: entity.id,
                source,
            },
        )?;

        Ok(Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            address: entity.address,
            phone: entity.phone,
            settings,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateBusinessParam {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub settings: BusinessSettings,
}

impl CreateBusinessParam {
    /// Business created by its owner; missing settings fall back to defaults.
    pub fn from_dto(owner_id: i32, dto: CreateBusinessDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            address: dto.address,
            phone: dto.phone,
            settings: dto
                .settings
                .map(BusinessSettings::from_dto)
                .unwrap_or_default(),
        }
    }

    pub fn from_admin_dto(dto: AdminCreateBusinessDto) -> Self {
        Self {
            owner_id: dto.owner_id,
            name: dto.name,
            description: dto.description,
            address: dto.address,
            phone: dto.phone,
            settings: dto
                .settings
                .map(BusinessSettings::from_dto)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBusinessParam {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl UpdateBusinessParam {
    pub fn from_dto(id: i32, dto: UpdateBusinessDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            address: dto.address,
            phone: dto.phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBusinesses {
    pub businesses: Vec<Business>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBusinesses {
    pub fn into_dto(self) -> PaginatedBusinessesDto {
        PaginatedBusinessesDto {
            businesses: self.businesses.into_iter().map(Business::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Business with its active services and workers, as shown to clients.
#[derive(Debug, Clone)]
pub struct BusinessDetail {
    pub business: Business,
    pub services: Vec<Service>,
    pub workers: Vec<User>,
}

impl BusinessDetail {
    pub fn into_dto(self) -> BusinessDetailDto {
        BusinessDetailDto {
            business: self.business.into_dto(),
            services: self.services.into_iter().map(Service::into_dto).collect(),
            workers: self
                .workers
                .into_iter()
                .map(|w| WorkerDto {
                    id: w.id,
                    name: w.name,
                })
                .collect(),
        }
    }
}
