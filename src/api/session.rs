// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    auth::cookie,
    auth::error::AuthError,
    auth::extractor::CurrentSession,
    models::SessionResponse,
    state::AppState,
};

/// Current-session lookup.
///
/// Signed out (no cookie, or one that fails verification) is not an error:
/// the body is JSON `null` with status 200. A session past the refresh age
/// comes back re-issued, with a fresh cookie riding on the response.
#[utoipa::path(
    get,
    path = "/auth/session",
    tag = "Auth",
    responses(
        (status = 200, description = "Current session, or null when signed out", body = SessionResponse)
    )
)]
pub async fn session(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AuthError> {
    let Some(claims) = session else {
        return Ok(Json(None::<SessionResponse>).into_response());
    };

    if state.sessions.needs_refresh(&claims) {
        let issued = state.sessions.refresh(&claims)?;
        tracing::debug!(user = %issued.claims.sub, "re-issued session past refresh age");

        let cookie = cookie::session_cookie(&issued.token, state.sessions.ttl_secs());
        return Ok((
            [(header::SET_COOKIE, cookie)],
            Json(Some(SessionResponse::from(&issued.claims))),
        )
            .into_response());
    }

    Ok(Json(Some(SessionResponse::from(&claims))).into_response())
}
