//! Authentication
//!
//! Sign-in is delegated to a hosted identity provider. The service itself
//! only checks whether the session cookie is present; it never validates the
//! token it holds.

pub mod cookie;
pub mod hosted;

use async_trait::async_trait;
use thiserror::Error;

pub use cookie::SESSION_COOKIE;
pub use hosted::HostedAuthClient;

/// Shown when the provider gives no usable reason for a failed sign-in.
pub const FALLBACK_LOGIN_ERROR: &str = "Invalid credentials. Please try again.";

#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider refused the request and said why
    #[error("{0}")]
    Rejected(String),

    #[error("auth provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected auth provider response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Text safe to show on the sign-in form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected(reason) if !reason.trim().is_empty() => reason.clone(),
            _ => FALLBACK_LOGIN_ERROR.to_string(),
        }
    }
}

/// A signed-in member as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSession {
    pub member_id: String,
    pub email: String,
    /// Value stored in the session cookie
    pub token: String,
}

/// Hosted identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<MemberSession, AuthError>;

    async fn logout(&self, token: &str) -> Result<(), AuthError>;
}
