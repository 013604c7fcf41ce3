//! Runs the task API over HTTP.
//!
//! Configuration comes from the environment (see [`taskbe::config`]); a
//! `.env` file in the working directory is loaded first when present.
//! `RUST_LOG` controls log filtering and defaults to
//! `taskbe=debug,tower_http=debug`.

use std::sync::Arc;

use mockable::DefaultClock;
use taskbe::{
    config::ServerConfig,
    http::router,
    task::{adapters::memory::InMemoryTaskRepository, services::TaskService},
};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taskbe=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(error) = dotenv {
        tracing::debug!(%error, "no .env file loaded");
    }

    let config = ServerConfig::from_env().inspect_err(|error| {
        tracing::error!(%error, "configuration error");
    })?;

    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let app = router(service);

    let address = config.socket_addr();
    let listener = TcpListener::bind(address).await?;
    tracing::info!(%address, "task API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
