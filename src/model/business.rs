use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::ServiceDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BusinessSettingsDto {
    /// First bookable hour of the day (UTC).
    pub opening_hour: u8,
    /// Hour at which the last booking must have ended (UTC).
    pub closing_hour: u8,
    /// Minimum hours before the start a client may still cancel.
    pub cancellation_window_hours: u32,
    pub online_payments: bool,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BusinessDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub settings: BusinessSettingsDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBusinessesDto {
    pub businesses: Vec<BusinessDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkerDto {
    pub id: i32,
    pub name: String,
}

/// Public view of a business with everything needed to book.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusinessDetailDto {
    pub business: BusinessDto,
    pub services: Vec<ServiceDto>,
    pub workers: Vec<WorkerDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBusinessDto {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub settings: Option<BusinessSettingsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminCreateBusinessDto {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub settings: Option<BusinessSettingsDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBusinessDto {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BusinessClientDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub client_since: DateTime<Utc>,
}
