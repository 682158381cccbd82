//! Service catalog domain models.
//!
//! A service is something a business offers for booking, with a fixed duration and
//! price in minor currency units.

use crate::model::catalog::{CreateServiceDto, ServiceDto, UpdateServiceDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub business_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub active: bool,
}

impl Service {
    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            business_id: self.business_id,
            name: self.name,
            description: self.description,
            duration_minutes: self.duration_minutes,
            price_cents: self.price_cents,
            active: self.active,
        }
    }

    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            business_id: entity.business_id,
            name: entity.name,
            description: entity.description,
            duration_minutes: entity.duration_minutes,
            price_cents: entity.price_cents,
            active: entity.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceParam {
    pub business_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
}

#[derive(Debug, Clone)]
pub struct UpdateServiceParam {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub active: bool,
}

impl CreateServiceParam {
    pub fn from_dto(business_id: i32, dto: CreateServiceDto) -> Self {
        Self {
            business_id,
            name: dto.name,
            description: dto.description,
            duration_minutes: dto.duration_minutes,
            price_cents: dto.price_cents,
        }
    }
}

impl UpdateServiceParam {
    pub fn from_dto(id: i32, dto: UpdateServiceDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            duration_minutes: dto.duration_minutes,
            price_cents: dto.price_cents,
            active: dto.active,
        }
    }
}
