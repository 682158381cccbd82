use sea_orm::DatabaseConnection;

use crate::server::config::PaymentConfig;

/// Handles shared by every handler; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Client for payment processor calls, built by `startup::setup_reqwest_client`.
    pub http_client: reqwest::Client,
    pub payment: PaymentConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, payment: PaymentConfig) -> Self {
        Self {
            db,
            http_client,
            payment,
        }
    }
}
