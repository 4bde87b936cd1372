// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the sign-in API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for automatic JSON handling and
//! OpenAPI documentation.
//!
//! ## Wire Naming
//!
//! The sign-in form labels its first field `username`, but the exchange
//! submits it as `email`. [`SignInRequest`] is the wire shape;
//! [`crate::auth::Credentials`] is the form shape. `From<Credentials>`
//! performs the rename.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::auth::credentials::{field_messages, Credentials};
use crate::auth::session::SessionClaims;

// =============================================================================
// Sign-in Exchange
// =============================================================================

/// Payload of `POST /auth/callback/credentials`.
///
/// Carries the same minimum-length rules as the form schema. The server
/// re-validates because the payload may come from any HTTP client, not just
/// the page.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignInRequest {
    /// Account email. The form's `username` field lands here.
    #[validate(length(min = 4, message = "must be at least 4 characters"))]
    pub email: String,

    /// Plaintext password.
    #[validate(length(min = 4, message = "must be at least 4 characters"))]
    pub password: String,
}

impl From<Credentials> for SignInRequest {
    fn from(credentials: Credentials) -> Self {
        Self {
            email: credentials.username,
            password: credentials.password,
        }
    }
}

/// Result of a sign-in or sign-out exchange.
///
/// `ok == true` carries the navigation target in `url`; `ok == false`
/// carries the rejection message in `error`. The two never appear together.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInResponse {
    pub ok: bool,

    /// Where the page should navigate next.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Rejection message, shown verbatim by the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SignInResponse {
    pub fn success(url: impl Into<String>) -> Self {
        Self {
            ok: true,
            url: Some(url.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            url: None,
            error: Some(error.into()),
        }
    }
}

/// Body of a 422 response: per-field validation messages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub ok: bool,
    /// Offending field name to the messages for it, in field order.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            ok: false,
            errors: field_messages(errors),
        }
    }
}

// =============================================================================
// Session Lookup
// =============================================================================

/// The signed-in account as presented by `GET /auth/session`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Role label carried through from the token, untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl From<&SessionClaims> for SessionUser {
    fn from(claims: &SessionClaims) -> Self {
        Self {
            id: claims.sub.clone(),
            name: claims.name.clone(),
            email: claims.email.clone(),
            role: claims.role.clone(),
        }
    }
}

/// Body of `GET /auth/session` when a session exists.
///
/// `expires` is the token's `exp` in RFC 3339 with milliseconds, e.g.
/// `2026-03-01T00:00:00.000Z`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub expires: String,
}

impl From<&SessionClaims> for SessionResponse {
    fn from(claims: &SessionClaims) -> Self {
        let expires = DateTime::from_timestamp(claims.exp, 0)
            .unwrap_or(DateTime::UNIX_EPOCH)
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            user: SessionUser::from(claims),
            expires,
        }
    }
}

/// Body of `GET /` for a signed-in visitor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub user: SessionUser,
}
