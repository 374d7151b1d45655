use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use creator_collab_api::config::{LoggingConfig, Settings};
use creator_collab_api::error::AppError;
use creator_collab_api::postgres::PostgresPool;
use creator_collab_api::server::{create_app, AppState};
use creator_collab_api::store::create_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new().map_err(AppError::from)?;

    // Initialize tracing
    init_tracing(&settings.logging);
    tracing::info!(store = %settings.store.backend, "Configuration loaded");

    // Service-role pool, only when the store needs it
    let postgres_pool = if settings.store.backend == "postgres" {
        Some(
            PostgresPool::new(&settings.database)
                .await
                .map_err(AppError::from)?,
        )
    } else {
        None
    };

    let store = create_store(&settings.store, postgres_pool.as_ref())?;
    let state = AppState::new(settings.clone(), store);
    tracing::info!("Application state initialized");

    // Create Axum app
    let app = create_app(state);

    // Start server
    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal_handler())
        .await?;

    if let Some(pool) = postgres_pool {
        pool.close().await;
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal_handler() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
