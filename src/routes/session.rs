//! Sign-in and sign-out

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::cookie;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::middleware::session_guard::{HOME_PATH, LOGIN_PATH};
use crate::models::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LoginPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: [&'static str; 2],
    pub submit_label: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub async fn login_page() -> Json<ApiResponse<LoginPage>> {
    Json(ApiResponse::success(LoginPage {
        title: "TicketQ",
        subtitle: "Sign in to your support dashboard",
        fields: ["email", "password"],
        submit_label: "Sign in",
    }))
}

/// Exchange credentials for a provider session and store its token in the cookie.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(AppError::MissingCredentials);
    }

    let session = state.auth.login(&credentials.email, &credentials.password).await?;
    tracing::info!(member_id = %session.member_id, "member signed in");

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie::session_cookie(&session.token))]),
        Redirect::to(HOME_PATH),
    ))
}

/// Always clears the cookie, even when the provider call fails.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = cookie::session_token(&headers) {
        if let Err(err) = state.auth.logout(&token).await {
            tracing::warn!(error = %err, "provider logout failed");
        }
    }

    (
        AppendHeaders([(header::SET_COOKIE, cookie::expired_session_cookie())]),
        Redirect::to(LOGIN_PATH),
    )
}
