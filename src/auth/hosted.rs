//! Hosted identity provider client

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};

use super::{AuthError, IdentityProvider, MemberSession};
use crate::config::AuthConfig;

const API_KEY_HEADER: &str = "X-API-Key";
const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";

/// HTTP client for the hosted member-auth API
pub struct HostedAuthClient {
    http: reqwest::Client,
    api_base: String,
    public_key: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginEnvelope {
    data: LoginData,
}

#[derive(Deserialize)]
struct LoginData {
    member: MemberPayload,
    tokens: TokenPayload,
}

#[derive(Deserialize)]
struct MemberPayload {
    id: String,
    auth: MemberAuth,
}

#[derive(Deserialize)]
struct MemberAuth {
    email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload {
    access_token: String,
}

#[derive(Deserialize)]
struct ProviderError {
    message: Option<String>,
    error: Option<String>,
}

impl HostedAuthClient {
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            public_key: config.public_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn rejection(resp: reqwest::Response) -> AuthError {
        let status = resp.status();
        let body = resp.json::<ProviderError>().await.ok();
        let reason = body
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_default();
        tracing::warn!(%status, reason = %reason, "auth provider rejected request");
        AuthError::Rejected(reason)
    }
}

#[async_trait]
impl IdentityProvider for HostedAuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<MemberSession, AuthError> {
        let resp = self
            .http
            .post(self.url(LOGIN_PATH))
            .header(API_KEY_HEADER, &self.public_key)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::rejection(resp).await);
        }

        let envelope: LoginEnvelope = resp
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        if envelope.data.tokens.access_token.is_empty() {
            return Err(AuthError::InvalidResponse("empty access token".into()));
        }

        Ok(MemberSession {
            member_id: envelope.data.member.id,
            email: envelope.data.member.auth.email,
            token: envelope.data.tokens.access_token,
        })
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.url(LOGOUT_PATH))
            .header(API_KEY_HEADER, &self.public_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => Ok(()),
            // Session already gone on the provider side
            StatusCode::UNAUTHORIZED => Ok(()),
            _ => Err(Self::rejection(resp).await),
        }
    }
}
