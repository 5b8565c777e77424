//! Dashboard shell: header, sidebar selection and alert pills

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::filter::{self, DashboardAlerts, NavView};
use crate::models::{Agent, ApiResponse};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct OverviewParams {
    pub view: Option<String>,
    pub agent: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub view: NavView,
    pub view_label: &'static str,
    pub current_agent: Agent,
    /// Active agent filter. `None` when no agent is selected or the id is unknown.
    pub agent_filter: Option<Agent>,
    pub alerts: DashboardAlerts,
}

pub async fn overview(
    State(state): State<AppState>,
    Query(params): Query<OverviewParams>,
) -> Json<ApiResponse<DashboardOverview>> {
    let view = params.view.as_deref().map(NavView::parse_lenient).unwrap_or_default();
    let agent_filter = params
        .agent
        .as_deref()
        .filter(|id| !id.is_empty())
        .and_then(|id| state.reference.agent(id))
        .cloned();

    let tickets = state.store.snapshot().await;

    Json(ApiResponse::success(DashboardOverview {
        view,
        view_label: view.label(),
        current_agent: state.current_agent.as_ref().clone(),
        agent_filter,
        alerts: filter::alerts(&tickets),
    }))
}
