//! Session cookie routing gate
//!
//! Presence check only: any non-empty `_ms-mid` value counts as signed in.
//!
//! | Cookie | Path | Result |
//! |--------|------|--------|
//! | absent | `/login` | pass |
//! | absent | anything else | 303 → `/login` |
//! | present | `/login` | 303 → `/` |
//! | present | anything else | pass |
//!
//! `/health` and `/api/logout` bypass the gate.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::cookie;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

const UNGUARDED_PATHS: &[&str] = &["/health", "/api/logout"];

#[derive(Debug, PartialEq, Eq)]
enum Gate {
    Pass,
    ToLogin,
    ToHome,
}

fn decide(path: &str, signed_in: bool) -> Gate {
    if UNGUARDED_PATHS.contains(&path) {
        return Gate::Pass;
    }
    match (signed_in, path == LOGIN_PATH) {
        (false, false) => Gate::ToLogin,
        (true, true) => Gate::ToHome,
        _ => Gate::Pass,
    }
}

pub async fn session_guard(req: Request, next: Next) -> Response {
    let signed_in = cookie::session_token(req.headers()).is_some();
    match decide(req.uri().path(), signed_in) {
        Gate::Pass => next.run(req).await,
        Gate::ToLogin => {
            tracing::debug!(path = %req.uri().path(), "no session, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
        Gate::ToHome => Redirect::to(HOME_PATH).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_decisions() {
        assert_eq!(decide("/", false), Gate::ToLogin);
        assert_eq!(decide("/api/tickets", false), Gate::ToLogin);
        assert_eq!(decide("/login", false), Gate::Pass);
        assert_eq!(decide("/login", true), Gate::ToHome);
        assert_eq!(decide("/api/tickets/t1", true), Gate::Pass);
        assert_eq!(decide("/health", false), Gate::Pass);
        assert_eq!(decide("/api/logout", false), Gate::Pass);
        assert_eq!(decide("/api/logout", true), Gate::Pass);
    }
}
