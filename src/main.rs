// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use product_service::config::{Config, StorageBackend};
use product_service::repository::{
    InMemoryProductRepository, PgProductRepository, ProductRepository,
};
use product_service::{app, database, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env and environment variables
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return;
        }
    };

    let repository: Arc<dyn ProductRepository> = match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will not survive a restart");
            Arc::new(InMemoryProductRepository::new())
        }
        StorageBackend::Postgres => {
            let database_url = config.database_url.as_deref().unwrap_or_default();
            let pool = database::create_pool(database_url, config.max_connections).await;
            let db_pool = match pool {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create database pool");
                    return;
                }
            };
            if let Err(e) = database::run_migrations(&db_pool).await {
                tracing::error!(error = %e, "Failed to run migrations");
                return;
            }
            Arc::new(PgProductRepository::new(db_pool))
        }
    };

    let app = app(AppState::new(repository));

    // Try port..port+N to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=config.port_fallback_attempts {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!(
                    "Failed to bind to any port starting at {} on {}",
                    config.port,
                    config.host
                );
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received, draining connections");
}
