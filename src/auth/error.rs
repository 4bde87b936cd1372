// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
///
/// `InvalidCredentials` is the credential-check failure surfaced to the
/// sign-in exchange; the remaining variants cover session token decoding.
/// The check never reports which of the two fields was wrong.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Submitted credentials do not match the expected pair
    InvalidCredentials,
    /// No session cookie present on the request
    MissingSessionCookie,
    /// Session token is malformed
    MalformedToken,
    /// Session token signature is invalid
    InvalidSignature,
    /// Session token has expired
    TokenExpired,
    /// Session token is not yet valid
    TokenNotYetValid,
    /// Token signing failed
    SigningError(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MissingSessionCookie => "missing_session_cookie",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::TokenNotYetValid => "token_not_yet_valid",
            AuthError::SigningError(_) => "signing_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MissingSessionCookie
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::TokenNotYetValid => StatusCode::UNAUTHORIZED,
            AuthError::SigningError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
            AuthError::MissingSessionCookie => write!(f, "No session cookie on the request"),
            AuthError::MalformedToken => write!(f, "Session token is malformed"),
            AuthError::InvalidSignature => write!(f, "Session token signature is invalid"),
            AuthError::TokenExpired => write!(f, "Session token has expired"),
            AuthError::TokenNotYetValid => write!(f, "Session token is not yet valid"),
            AuthError::SigningError(msg) => write!(f, "Failed to sign session token: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
