use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use sistema_api::config::{Config, StartupMode};
use sistema_api::db::{PgStore, SystemStore};
use sistema_api::routes::SISTEMA_PATH;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting sistema-api");

    // Connections are opened on demand; the check below is the only eager one.
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy(&config.database_url)?;
    let store = PgStore::new(pool);

    match store.ping().await {
        Ok(()) => tracing::info!("Connected to PostgreSQL"),
        Err(e) if config.startup_mode == StartupMode::FailFast => {
            tracing::error!("Failed to connect to database: {e}");
            return Err(e.into());
        }
        Err(e) => {
            tracing::error!("Failed to connect to database, serving anyway: {e}");
        }
    }

    let addr = SocketAddr::new(config.host, config.port);
    let app = sistema_api::build_app(Arc::new(store), config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");
    tracing::info!("Submit records: POST http://{addr}{SISTEMA_PATH}");
    tracing::info!("List records: GET http://{addr}{SISTEMA_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
