//! Agent roster and canned response templates

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::{Agent, ApiResponse, CannedResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AgentSummary {
    #[serde(flatten)]
    pub agent: Agent,
    /// Unsettled tickets currently assigned, counted from the live board.
    pub live_open_tickets: usize,
}

pub async fn list_agents(State(state): State<AppState>) -> Json<ApiResponse<Vec<AgentSummary>>> {
    let tickets = state.store.snapshot().await;
    let agents = state
        .reference
        .agents
        .iter()
        .map(|agent| AgentSummary {
            live_open_tickets: tickets
                .iter()
                .filter(|t| t.is_assigned_to(&agent.id) && !t.status.is_settled())
                .count(),
            agent: agent.clone(),
        })
        .collect();
    Json(ApiResponse::success(agents))
}

pub async fn list_canned_responses(State(state): State<AppState>) -> Json<ApiResponse<Vec<CannedResponse>>> {
    Json(ApiResponse::success(state.reference.canned_responses.clone()))
}
