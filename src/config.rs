//! Service configuration

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const PUBLIC_KEY_VAR: &str = "MEMBERSTACK_PUBLIC_KEY";
pub const AUTH_API_BASE_VAR: &str = "TICKETQ_AUTH_API_BASE";
pub const BIND_ADDR_VAR: &str = "TICKETQ_BIND_ADDR";
pub const CURRENT_AGENT_VAR: &str = "TICKETQ_CURRENT_AGENT";
pub const AUTH_TIMEOUT_VAR: &str = "TICKETQ_AUTH_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("current agent {0} is not in the agent roster")]
    UnknownAgent(String),
}

/// Identity provider settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Public key the auth client is initialised with
    pub public_key: String,
    /// Provider API base URL
    pub api_base: String,
    pub timeout: Duration,
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Agent id the "mine" view and authored replies refer to
    pub current_agent: String,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";
    pub const DEFAULT_AUTH_API_BASE: &'static str = "https://client.memberstack.com";
    pub const DEFAULT_CURRENT_AGENT: &'static str = "a1";
    pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 30;

    /// Load from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let public_key = get(PUBLIC_KEY_VAR).ok_or(ConfigError::Missing(PUBLIC_KEY_VAR))?;

        let bind_raw = get(BIND_ADDR_VAR).unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: BIND_ADDR_VAR,
            value: bind_raw.clone(),
        })?;

        let timeout_secs = match get(AUTH_TIMEOUT_VAR) {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: AUTH_TIMEOUT_VAR,
                value: raw.clone(),
            })?,
            None => Self::DEFAULT_AUTH_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            current_agent: get(CURRENT_AGENT_VAR).unwrap_or_else(|| Self::DEFAULT_CURRENT_AGENT.into()),
            auth: AuthConfig {
                public_key,
                api_base: get(AUTH_API_BASE_VAR)
                    .map(|base| base.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| Self::DEFAULT_AUTH_API_BASE.into()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
