//! Customer context panel

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::{ApiResponse, Customer, Plan, RecentTicket, TicketStatus};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_customer))
        .route("/:id/notes", put(update_notes))
}

/// Recent ticket summary; `linked` entries exist on the live board and can be opened.
#[derive(Debug, Serialize)]
pub struct LinkedRecentTicket {
    pub id: String,
    pub subject: String,
    pub status: TicketStatus,
    pub date: String,
    pub linked: bool,
}

#[derive(Debug, Serialize)]
pub struct CustomerContext {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub plan: Plan,
    pub account_age: String,
    pub total_tickets: u32,
    pub lifetime_value: String,
    pub notes: String,
    pub recent_tickets: Vec<LinkedRecentTicket>,
}

#[derive(Debug, Deserialize)]
pub struct NotesUpdate {
    pub notes: String,
}

async fn context(state: &AppState, customer: Customer) -> CustomerContext {
    let board = state.store.snapshot().await;
    let link = |r: RecentTicket| LinkedRecentTicket {
        linked: board.iter().any(|t| t.id == r.id),
        id: r.id,
        subject: r.subject,
        status: r.status,
        date: r.date,
    };

    CustomerContext {
        recent_tickets: customer.recent_tickets.into_iter().map(link).collect(),
        id: customer.id,
        name: customer.name,
        email: customer.email,
        company: customer.company,
        plan: customer.plan,
        account_age: customer.account_age,
        total_tickets: customer.total_tickets,
        lifetime_value: customer.lifetime_value,
        notes: customer.notes,
    }
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CustomerContext>>, AppError> {
    let customer = state.store.customer(&id).await.ok_or(AppError::CustomerNotFound(id))?;
    Ok(Json(ApiResponse::success(context(&state, customer).await)))
}

pub async fn update_notes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<NotesUpdate>,
) -> Result<Json<ApiResponse<CustomerContext>>, AppError> {
    let customer = state
        .store
        .set_customer_notes(&id, body.notes)
        .await
        .ok_or(AppError::CustomerNotFound(id))?;
    Ok(Json(ApiResponse::success(context(&state, customer).await)))
}
