use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_sessions::{
    cookie::Key, service::SignedCookie, Expiry, ExpiredDeletion, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::seed::SeedService,
};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";
/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;
/// Interval between sweeps of expired sessions.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);
/// Timeout for requests to the payment processor.
const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(15);

/// Installs the global `tracing` subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Session cookies are signed with `AUTH_SECRET` and expire after seven days of
/// inactivity. A background task removes expired sessions from the store.
///
/// # Arguments
/// - `db` - Database whose SQLite pool stores the sessions
/// - `config` - Provides the signing secret and the `Secure` cookie flag
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to be added to the router
/// - `Err(AppError::SqlxErr)` - The session table could not be created
/// - `Err(AppError::ConfigErr)` - The signing secret is unusable
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    tokio::spawn(
        session_store
            .clone()
            .continuously_delete_expired(SESSION_CLEANUP_INTERVAL),
    );

    let key = Key::try_from(config.auth_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidValue {
            name: "AUTH_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookie)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )))
        .with_signed(key))
}

/// Builds the HTTP client used for payment processor requests.
///
/// Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_CLIENT_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Allows credentialed browser requests from the application's own origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config.app_url.trim_end_matches('/');
    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
        name: "APP_URL".to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Bootstraps the admin account and, when enabled, the demo data.
pub async fn seed(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let seed_service = SeedService::new(db);

    seed_service
        .bootstrap_admin(config.admin_email.as_deref(), config.admin_password.as_deref())
        .await?;

    if config.seed_demo_data && !seed_service.seed_demo_data().await? {
        tracing::info!("Skipping demo data; businesses already exist");
    }

    Ok(())
}

/// Resolves once the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
