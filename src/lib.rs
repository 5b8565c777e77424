//! TicketQ Support Desk API
//!
//! Backend for a single-page support dashboard: a filterable ticket list,
//! ticket detail with replies and internal notes, and a customer context
//! panel. All data is seeded in memory at startup and lives for the process.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         HTTP (axum)                              │
//! │   TraceLayer → session guard (_ms-mid) → routes                  │
//! └───────────────┬──────────────────────────────┬───────────────────┘
//!                 │                              │
//! ┌───────────────▼───────────────┐  ┌───────────▼───────────────────┐
//! │  filter       mutations       │  │  auth: IdentityProvider       │
//! │  view/agent/status/priority/q │  │  hosted login / logout        │
//! └───────────────┬───────────────┘  └───────────────────────────────┘
//!                 │
//! ┌───────────────▼───────────────────────────────────────────────────┐
//! │  TicketStore (copy-on-write Vec<Arc<Ticket>>)   ReferenceData     │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod canned;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod middleware;
pub mod models;
pub mod mutations;
pub mod routes;
pub mod seed;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use auth::{AuthError, HostedAuthClient, IdentityProvider, MemberSession};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use models::*;
pub use store::{ReferenceData, TicketStore};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TicketStore>,
    pub reference: Arc<ReferenceData>,
    /// The signed-in agent: owner of the "mine" view and author of replies
    pub current_agent: Arc<Agent>,
    pub auth: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Seeded state acting as `current_agent_id`.
    pub fn new(current_agent_id: &str, auth: Arc<dyn IdentityProvider>) -> Result<Self, ConfigError> {
        let reference = ReferenceData::seeded();
        let current_agent = reference
            .agent(current_agent_id)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownAgent(current_agent_id.to_string()))?;

        Ok(Self {
            store: Arc::new(TicketStore::seeded()),
            reference: Arc::new(reference),
            current_agent: Arc::new(current_agent),
            auth,
        })
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::dashboard::overview))
        .route("/login", get(routes::session::login_page).post(routes::session::login))
        .route("/api/logout", get(routes::session::logout))
        .route("/api/agents", get(routes::reference::list_agents))
        .route("/api/canned-responses", get(routes::reference::list_canned_responses))
        .nest("/api/tickets", routes::tickets::router())
        .nest("/api/customers", routes::customers::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::session_guard::session_guard)),
        )
        .with_state(state)
}
