use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_PAYMENT_API_BASE: &str = "https://api.stripe.com";
const DEFAULT_PLATFORM_FEE_BPS: u32 = 500;

/// Minimum length of the session signing secret, required by the cookie `Key`.
pub const AUTH_SECRET_MIN_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub app_url: String,

    pub auth_secret: String,
    pub secure_cookie: bool,

    pub admin_email: Option<String>,
    pub admin_password: Option<String>,

    pub payment: PaymentConfig,

    pub seed_demo_data: bool,
}

/// Payment processor credentials and fee settings.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub secret_key: Option<String>,
    pub webhook_secret: Option<String>,
    pub api_base: Url,
    /// Platform fee in basis points of the charged amount.
    pub platform_fee_bps: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let auth_secret = required("AUTH_SECRET")?;
        if auth_secret.len() < AUTH_SECRET_MIN_LEN {
            return Err(ConfigError::InvalidValue {
                name: "AUTH_SECRET".to_string(),
                reason: format!("must be at least {} bytes", AUTH_SECRET_MIN_LEN),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            auth_secret,
            secure_cookie: parse_bool("SESSION_SECURE_COOKIE")?.unwrap_or(false),
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
            payment: PaymentConfig::from_env()?,
            seed_demo_data: parse_bool("SEED_DEMO_DATA")?.unwrap_or(false),
        })
    }
}

impl PaymentConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let api_base = optional("STRIPE_API_BASE")
            .unwrap_or_else(|| DEFAULT_PAYMENT_API_BASE.to_string());
        let api_base = Url::parse(&api_base).map_err(|e| ConfigError::InvalidValue {
            name: "STRIPE_API_BASE".to_string(),
            reason: e.to_string(),
        })?;

        let platform_fee_bps = match optional("PLATFORM_FEE_BPS") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|bps| *bps <= 10_000)
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "PLATFORM_FEE_BPS".to_string(),
                    reason: "must be an integer between 0 and 10000".to_string(),
                })?,
            None => DEFAULT_PLATFORM_FEE_BPS,
        };

        Ok(Self {
            secret_key: optional("STRIPE_SECRET_KEY"),
            webhook_secret: optional("STRIPE_WEBHOOK_SECRET"),
            api_base,
            platform_fee_bps,
        })
    }
}

#[cfg(test)]
impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            webhook_secret: None,
            api_base: Url::parse(DEFAULT_PAYMENT_API_BASE).expect("default API base is valid"),
            platform_fee_bps: DEFAULT_PLATFORM_FEE_BPS,
        }
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(name: &str) -> Result<Option<bool>, ConfigError> {
    match optional(name) {
        None => Ok(None),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(Some(true)),
            "0" | "false" | "no" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue {
                name: name.to_string(),
                reason: format!("expected a boolean, got '{}'", value),
            }),
        },
    }
}
