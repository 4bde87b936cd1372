// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for the session cookie.
//!
//! Use `CurrentSession` on pages that merely adapt to sign-in state, and
//! `RequireSession` on endpoints that must not run without one:
//!
//! ```rust,ignore
//! async fn dashboard(CurrentSession(session): CurrentSession) -> impl IntoResponse {
//!     // session is Option<SessionClaims>
//! }
//! ```

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::cookie;
use super::error::AuthError;
use super::session::SessionClaims;
use crate::state::AppState;

/// Extractor that looks up the session without ever rejecting.
///
/// Missing cookie, bad signature, expired token: all collapse to `None`.
/// Handlers see "signed in or not", nothing else.
pub struct CurrentSession(pub Option<SessionClaims>);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = cookie::session_token(&parts.headers) else {
            return Ok(CurrentSession(None));
        };

        match state.sessions.verify(&token) {
            Ok(claims) => Ok(CurrentSession(Some(claims))),
            Err(err) => {
                tracing::debug!(error = %err, "discarding invalid session cookie");
                Ok(CurrentSession(None))
            }
        }
    }
}

/// Extractor that requires a live session.
///
/// Rejects with 401 when the cookie is absent or its token does not verify.
pub struct RequireSession(pub SessionClaims);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = cookie::session_token(&parts.headers).ok_or(AuthError::MissingSessionCookie)?;
        let claims = state.sessions.verify(&token)?;
        Ok(RequireSession(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::cookie::SESSION_COOKIE;
    use crate::config::AuthOptions;
    use axum::http::Request;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const TEST_SECRET: &str = "extractor-test-secret-0123456789";

    fn create_test_state() -> AppState {
        AppState::new(AuthOptions::with_secret(TEST_SECRET))
    }

    fn parts_with_cookie(cookie: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(cookie) = cookie {
            builder = builder.header("Cookie", cookie);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn issue_cookie(state: &AppState) -> String {
        let identity = crate::auth::store::Identity {
            id: "1234".to_string(),
            name: "John Doe".to_string(),
            email: "john@gmail.com".to_string(),
            role: Some("admin".to_string()),
        };
        let issued = state.sessions.issue(&identity).expect("issue");
        format!("{SESSION_COOKIE}={}", issued.token)
    }

    #[tokio::test]
    async fn current_session_is_none_without_a_cookie() {
        let state = create_test_state();
        let mut parts = parts_with_cookie(None);

        let CurrentSession(session) = CurrentSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn current_session_carries_the_claims_for_a_valid_cookie() {
        let state = create_test_state();
        let cookie = issue_cookie(&state);
        let mut parts = parts_with_cookie(Some(&cookie));

        let CurrentSession(session) = CurrentSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        let claims = session.expect("session present");
        assert_eq!(claims.sub, "1234");
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn current_session_swallows_garbage_cookies() {
        let state = create_test_state();
        let mut parts = parts_with_cookie(Some("session_token=not-a-jwt"));

        let CurrentSession(session) = CurrentSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn current_session_swallows_expired_tokens() {
        let state = create_test_state();
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "1234".to_string(),
            name: None,
            email: None,
            role: None,
            iat: now - 1000,
            exp: now - 500,
            jti: "stale".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();
        let cookie = format!("{SESSION_COOKIE}={token}");
        let mut parts = parts_with_cookie(Some(&cookie));

        let CurrentSession(session) = CurrentSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn require_session_rejects_without_a_cookie() {
        let state = create_test_state();
        let mut parts = parts_with_cookie(None);

        let result = RequireSession::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingSessionCookie)));
    }

    #[tokio::test]
    async fn require_session_rejects_a_foreign_signature() {
        let state = create_test_state();
        let other = AppState::new(AuthOptions::with_secret("some-other-secret-value"));
        let cookie = issue_cookie(&other);
        let mut parts = parts_with_cookie(Some(&cookie));

        let result = RequireSession::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[tokio::test]
    async fn require_session_returns_the_claims() {
        let state = create_test_state();
        let cookie = issue_cookie(&state);
        let mut parts = parts_with_cookie(Some(&cookie));

        let RequireSession(claims) = RequireSession::from_request_parts(&mut parts, &state)
            .await
            .expect("session required and present");
        assert_eq!(claims.email.as_deref(), Some("john@gmail.com"));
    }
}
