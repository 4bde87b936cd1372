// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::{
    auth::cookie,
    auth::error::AuthError,
    config::{HOME_PAGE, SIGN_IN_PAGE},
    models::{SignInRequest, SignInResponse, ValidationErrorResponse},
    state::AppState,
};

/// The sign-in page.
///
/// A static document: field errors and the rejection banner are rendered by
/// the page's own script, never by the server.
#[utoipa::path(
    get,
    path = "/auth/signin",
    tag = "Auth",
    responses((status = 200, description = "Sign-in form", body = String, content_type = "text/html"))
)]
pub async fn sign_in_page() -> Html<&'static str> {
    Html(include_str!("../../assets/signin.html"))
}

/// Credential sign-in exchange.
///
/// Re-validates the payload, checks the pair against the store, and on
/// success installs the session cookie alongside the `{ ok, url }` body.
#[utoipa::path(
    post,
    path = "/auth/callback/credentials",
    request_body = SignInRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Signed in, session cookie set", body = SignInResponse),
        (status = 401, description = "Credentials rejected", body = SignInResponse),
        (status = 422, description = "Payload failed validation", body = ValidationErrorResponse)
    )
)]
pub async fn credentials_callback(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Response, AuthError> {
    if let Err(errors) = request.validate() {
        tracing::debug!("rejecting sign-in payload that failed validation");
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse::from(&errors)),
        )
            .into_response());
    }

    let identity = match state.store.authorize(&request.email, &request.password) {
        Ok(identity) => identity,
        Err(err) => {
            // Uniform rejection: the body never says which half was wrong.
            tracing::info!("sign-in attempt rejected");
            return Ok((
                StatusCode::UNAUTHORIZED,
                Json(SignInResponse::rejected(err.to_string())),
            )
                .into_response());
        }
    };

    let issued = state.sessions.issue(&identity)?;
    tracing::info!(user = %identity.id, "sign-in succeeded");

    let cookie = cookie::session_cookie(&issued.token, state.sessions.ttl_secs());
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse::success(HOME_PAGE)),
    )
        .into_response())
}

/// Sign-out: clear the session cookie.
///
/// Succeeds whether or not a session was present. The expired `Set-Cookie`
/// is what actually ends the session; there is no server-side record to
/// delete.
#[utoipa::path(
    post,
    path = "/auth/signout",
    tag = "Auth",
    responses((status = 200, description = "Session cookie cleared", body = SignInResponse))
)]
pub async fn sign_out() -> impl IntoResponse {
    tracing::info!("sign-out");
    (
        [(header::SET_COOKIE, cookie::clear_session_cookie())],
        Json(SignInResponse::success(SIGN_IN_PAGE)),
    )
}
