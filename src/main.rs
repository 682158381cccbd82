mod model;
mod server;

use std::net::SocketAddr;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let cors = startup::cors_layer(&config)?;

    startup::seed(&db, &config).await?;

    if config.payment.secret_key.is_none() {
        tracing::warn!("STRIPE_SECRET_KEY is not set; online payments are unavailable");
    }

    let state = AppState::new(db, http_client, config.payment.clone());
    let app = router::app(state, session, cors)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    tracing::info!("API documentation at {}/api/docs", config.app_url);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    Ok(())
}
