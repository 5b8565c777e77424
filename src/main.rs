//! TicketQ support desk server
//!
//! Loads configuration from the environment, seeds the in-memory board and
//! serves the dashboard API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticketq::{build_router, AppConfig, AppState, HostedAuthClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("TicketQ v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        e
    })?;

    let auth = HostedAuthClient::new(&config.auth)?;
    let state = AppState::new(&config.current_agent, Arc::new(auth))?;
    tracing::info!(agent = %state.current_agent.name, "seeded ticket board");

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("TicketQ listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
