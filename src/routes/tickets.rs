//! Ticket list, detail and mutation endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::canned;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::filter::{self, FilterParams, StatusCounts, TicketFilter};
use crate::models::*;
use crate::mutations;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets))
        .route("/:id", get(get_ticket))
        .route("/:id/status", put(update_status))
        .route("/:id/priority", put(update_priority))
        .route("/:id/assignee", put(update_assignee))
        .route("/:id/messages", post(add_message))
        .route("/:id/quick-advance", post(quick_advance))
        .route("/:id/canned/:canned_id", get(render_canned))
}

// ============ Responses ============

/// Compact list entry
#[derive(Debug, Serialize)]
pub struct TicketRow {
    pub id: String,
    pub number: u32,
    pub subject: String,
    pub preview: String,
    pub customer_name: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub assigned_to: Option<String>,
    pub updated_at: String,
    pub channel: Channel,
    pub tags: Vec<String>,
    pub awaiting_first_response: bool,
    /// Messages the customer can see; internal notes excluded
    pub public_message_count: usize,
    pub sla: SlaSummary,
}

impl From<&Ticket> for TicketRow {
    fn from(t: &Ticket) -> Self {
        Self {
            id: t.id.clone(),
            number: t.number,
            subject: t.subject.clone(),
            preview: t.preview.clone(),
            customer_name: t.customer_name.clone(),
            priority: t.priority,
            status: t.status,
            assigned_to: t.assigned_to.clone(),
            updated_at: t.updated_at.clone(),
            channel: t.channel,
            tags: t.tags.clone(),
            awaiting_first_response: t.awaiting_first_response(),
            public_message_count: t.public_messages().count(),
            sla: t.sla(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketListing {
    pub tickets: Vec<TicketRow>,
    pub status_counts: StatusCounts,
    pub total: usize,
}

/// Everything the detail pane and the customer panel header need
#[derive(Debug, Serialize)]
pub struct TicketDetail {
    pub ticket: Ticket,
    pub channel_label: &'static str,
    pub sla: SlaSummary,
    pub next_status: Option<TicketStatus>,
    /// Button text for the reply-and-advance action, absent for closed tickets
    pub quick_advance_label: Option<String>,
    pub assignee: Option<Agent>,
    pub customer: Option<Customer>,
}

async fn detail(state: &AppState, ticket: Arc<Ticket>) -> TicketDetail {
    let next_status = ticket.status.next();
    let assignee = ticket
        .assigned_to
        .as_deref()
        .and_then(|id| state.reference.agent(id))
        .cloned();
    let customer = state.store.customer(&ticket.customer_id).await;

    TicketDetail {
        channel_label: ticket.channel.label(),
        sla: ticket.sla(),
        next_status,
        quick_advance_label: next_status.map(|s| format!("Reply & Set {}", s.label())),
        assignee,
        customer,
        ticket: ticket.as_ref().clone(),
    }
}

async fn respond(state: &AppState, ticket_id: String, ticket: Option<Arc<Ticket>>) -> Result<Json<ApiResponse<TicketDetail>>, AppError> {
    let ticket = ticket.ok_or(AppError::TicketNotFound(ticket_id))?;
    Ok(Json(ApiResponse::success(detail(state, ticket).await)))
}

// ============ Requests ============

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct PriorityUpdate {
    pub priority: String,
}

#[derive(Debug, Deserialize)]
pub struct AssigneeUpdate {
    /// Empty string unassigns
    pub agent_id: String,
}

#[derive(Debug, Deserialize)]
pub struct NewMessage {
    pub content: String,
    #[serde(default)]
    pub is_internal: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderedCannedResponse {
    pub id: String,
    pub title: String,
    pub body: String,
}

// ============ Handlers ============

pub async fn list_tickets(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<ApiResponse<TicketListing>> {
    let filter = TicketFilter::from(params);
    let tickets = state.store.snapshot().await;
    let outcome = filter::apply(&tickets, &filter, &state.current_agent.id);

    Json(ApiResponse::success(TicketListing {
        tickets: outcome.tickets.iter().map(|t| TicketRow::from(t.as_ref())).collect(),
        status_counts: outcome.status_counts,
        total: outcome.total,
    }))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TicketDetail>>, AppError> {
    let ticket = state.store.ticket(&id).await;
    respond(&state, id, ticket).await
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<StatusUpdate>,
) -> Result<Json<ApiResponse<TicketDetail>>, AppError> {
    let status: TicketStatus = body.status.parse().map_err(|e: UnknownVariant| AppError::BadRequest(e.to_string()))?;
    let ticket = state.store.apply(&id, |t| mutations::set_status(t, &id, status)).await;
    if ticket.is_some() {
        tracing::info!(ticket_id = %id, status = status.as_str(), "ticket status changed");
    }
    respond(&state, id, ticket).await
}

pub async fn update_priority(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<PriorityUpdate>,
) -> Result<Json<ApiResponse<TicketDetail>>, AppError> {
    let priority: Priority = body.priority.parse().map_err(|e: UnknownVariant| AppError::BadRequest(e.to_string()))?;
    let ticket = state.store.apply(&id, |t| mutations::set_priority(t, &id, priority)).await;
    respond(&state, id, ticket).await
}

pub async fn update_assignee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<AssigneeUpdate>,
) -> Result<Json<ApiResponse<TicketDetail>>, AppError> {
    let ticket = state.store.apply(&id, |t| mutations::assign(t, &id, &body.agent_id)).await;
    if ticket.is_some() {
        tracing::info!(ticket_id = %id, agent_id = %body.agent_id, "ticket reassigned");
    }
    respond(&state, id, ticket).await
}

/// Reply or internal note. Blank content leaves the thread as it is.
pub async fn add_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NewMessage>,
) -> Result<Json<ApiResponse<TicketDetail>>, AppError> {
    let author = Arc::clone(&state.current_agent);
    let ticket = state
        .store
        .apply(&id, |t| mutations::append_message(t, &id, &body.content, body.is_internal, &author))
        .await;
    respond(&state, id, ticket).await
}

pub async fn quick_advance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NewMessage>,
) -> Result<Json<ApiResponse<TicketDetail>>, AppError> {
    if body.content.trim().is_empty() {
        return Err(AppError::BadRequest("Reply text is required to advance the ticket.".into()));
    }

    let author = Arc::clone(&state.current_agent);
    let ticket = state
        .store
        .try_apply(&id, |t| mutations::quick_advance(t, &id, &body.content, body.is_internal, &author))
        .await?;
    if let Some(t) = &ticket {
        tracing::info!(ticket_id = %id, status = t.status.as_str(), "ticket advanced");
    }
    respond(&state, id, ticket).await
}

pub async fn render_canned(
    State(state): State<AppState>,
    Path((id, canned_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<RenderedCannedResponse>>, AppError> {
    let ticket = state.store.ticket(&id).await.ok_or(AppError::TicketNotFound(id))?;
    let template = state
        .reference
        .canned_response(&canned_id)
        .ok_or(AppError::CannedResponseNotFound(canned_id))?;

    Ok(Json(ApiResponse::success(RenderedCannedResponse {
        id: template.id.clone(),
        title: template.title.clone(),
        body: canned::render_for_ticket(template, &ticket, &state.reference.agents),
    })))
}
