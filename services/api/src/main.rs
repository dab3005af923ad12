use std::sync::Arc;

use anyhow::Result;
use api::{AppState, config::Settings, routes};
use auth::{AuthService, JwtService, StoreCredentials};
use common::{SqliteStore, Store};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting movie catalog API");

    let settings = Settings::load()?;

    // Open the store; creates the tables on first start
    let store: Arc<dyn Store> =
        Arc::new(SqliteStore::open(&settings.database_config()).await?);

    // Signing and verification share the same secret
    let jwt_service = JwtService::new(&settings.jwt_config())?;
    let credentials = Arc::new(StoreCredentials::new(store.clone()));
    let auth_service = AuthService::new(credentials, jwt_service.clone());

    let app_state = AppState {
        store: store.clone(),
        auth_service,
        jwt_service,
    };

    let app = routes::create_router(app_state);

    let address = settings.server.address();
    let listener = TcpListener::bind(&address).await?;
    info!("Serving HTTP on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Movie catalog API stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
