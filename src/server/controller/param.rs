use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::user::Role;

/// Upper bound on `entries` for every paginated listing.
pub const MAX_ENTRIES: u64 = 100;

fn default_page() -> u64 {
    0
}

fn default_entries() -> u64 {
    10
}

/// Query parameters for paginated listings.
#[derive(Debug, Deserialize)]
pub struct PaginationParam {
    /// Zero-indexed page number.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page, clamped to `1..=MAX_ENTRIES`.
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParam {
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

/// Query parameters for the admin user listing.
#[derive(Debug, Deserialize)]
pub struct UserListParam {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub role: Option<Role>,
}

impl UserListParam {
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

/// Window queried for a worker's busy intervals.
#[derive(Debug, Deserialize)]
pub struct BusyRangeParam {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}
