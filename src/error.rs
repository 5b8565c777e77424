//! HTTP-facing error type

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::auth::AuthError;
use crate::models::ApiResponse;
use crate::mutations::QuickAdvanceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    #[error("canned response not found: {0}")]
    CannedResponseNotFound(String),

    #[error("Please enter your email and password.")]
    MissingCredentials,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    QuickAdvance(#[from] QuickAdvanceError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TicketNotFound(_)
            | AppError::CustomerNotFound(_)
            | AppError::CannedResponseNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingCredentials | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::QuickAdvance(_) => StatusCode::CONFLICT,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::TicketNotFound(_) => "ticket_not_found",
            AppError::CustomerNotFound(_) => "customer_not_found",
            AppError::CannedResponseNotFound(_) => "canned_response_not_found",
            AppError::MissingCredentials => "missing_credentials",
            AppError::BadRequest(_) => "bad_request",
            AppError::QuickAdvance(_) => "quick_advance_unavailable",
            AppError::Auth(_) => "login_failed",
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Auth(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Auth(err) = &self {
            tracing::warn!(error = %err, "login failed");
        }
        let body = ApiResponse::<()>::error(self.code(), &self.message());
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketStatus;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::TicketNotFound("t9".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::MissingCredentials.status(), StatusCode::BAD_REQUEST);

        let err: AppError = QuickAdvanceError::Unavailable {
            ticket_id: "t7".into(),
            status: TicketStatus::Closed,
        }
        .into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "quick_advance_unavailable");
    }

    #[test]
    fn test_auth_message_is_user_facing() {
        let err = AppError::from(AuthError::InvalidResponse("bad json".into()));
        assert_eq!(err.message(), crate::auth::FALLBACK_LOGIN_ERROR);

        let err = AppError::from(AuthError::Rejected("Invalid password".into()));
        assert_eq!(err.message(), "Invalid password");
    }
}
