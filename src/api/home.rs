// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::{
    auth::extractor::CurrentSession,
    config::SIGN_IN_PAGE,
    models::{HomeResponse, SessionUser},
};

/// The home page.
///
/// Signed-in visitors get their profile payload; everyone else is sent to
/// the sign-in page with `303 See Other`.
#[utoipa::path(
    get,
    path = "/",
    tag = "Auth",
    responses(
        (status = 200, description = "Signed-in home payload", body = HomeResponse),
        (status = 303, description = "No session, redirect to the sign-in page")
    )
)]
pub async fn home(CurrentSession(session): CurrentSession) -> Response {
    match session {
        Some(claims) => Json(HomeResponse {
            user: SessionUser::from(&claims),
        })
        .into_response(),
        None => Redirect::to(SIGN_IN_PAGE).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use chrono::Utc;

    use crate::auth::session::SessionClaims;

    fn admin_claims() -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            sub: "1234".to_string(),
            name: Some("John Doe".to_string()),
            email: Some("john@gmail.com".to_string()),
            role: Some("admin".to_string()),
            iat: now,
            exp: now + 3600,
            jti: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn signed_in_visitor_gets_the_home_payload() {
        let response = home(CurrentSession(Some(admin_claims()))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        let parsed: HomeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.user.id, "1234");
        assert_eq!(parsed.user.role.as_deref(), Some("admin"));
    }

    #[tokio::test]
    async fn anonymous_visitor_is_redirected_to_sign_in() {
        let response = home(CurrentSession(None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/signin"
        );
    }
}
