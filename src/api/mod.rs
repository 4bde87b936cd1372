// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ApiError,
    models::{
        HomeResponse, SessionResponse, SessionUser, SignInRequest, SignInResponse,
        ValidationErrorResponse,
    },
    state::AppState,
};

pub mod health;
pub mod home;
pub mod session;
pub mod signin;

pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/signin", get(signin::sign_in_page))
        .route("/auth/callback/credentials", post(signin::credentials_callback))
        .route("/auth/session", get(session::session))
        .route("/auth/signout", post(signin::sign_out));

    Router::new()
        .route("/", get(home::home))
        .merge(auth_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .fallback(not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home,
        signin::sign_in_page,
        signin::credentials_callback,
        signin::sign_out,
        session::session,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            SignInRequest,
            SignInResponse,
            ValidationErrorResponse,
            SessionUser,
            SessionResponse,
            HomeResponse
        )
    ),
    tags(
        (name = "Auth", description = "Credential sign-in and cookie sessions"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
