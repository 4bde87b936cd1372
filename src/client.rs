// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Typed client for the sign-in service.
//!
//! Mirrors what the sign-in page does from script: validate the form pair
//! locally, POST it to the callback endpoint, interpret the `{ ok, ... }`
//! body. Programs embedding this crate get the same flow with types.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use validator::Validate;

use crate::auth::cookie::SESSION_COOKIE;
use crate::auth::credentials::{field_messages, Credentials};
use crate::models::{SessionResponse, SignInRequest, SignInResponse, ValidationErrorResponse};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of a sign-in exchange that reached the server.
///
/// A rejected pair is an outcome, not an error: the exchange worked, the
/// answer was no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Signed in. `session_cookie` holds the `name=value` pair to send on
    /// later requests; `url` is where the server wants the caller to go.
    SignedIn {
        url: String,
        session_cookie: Option<String>,
    },
    /// The server turned the pair down.
    Rejected { error: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    /// The pair failed the schema before any request was made, or the
    /// server's 422 disagreed with us. Field name to messages.
    #[error("credentials failed validation")]
    Validation(BTreeMap<String, Vec<String>>),

    #[error("sign-in request failed: {0}")]
    Transport(String),

    #[error("sign-in response was invalid: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the sign-in service.
#[derive(Debug, Clone)]
pub struct SignInClient {
    base_url: String,
    http: Client,
}

impl SignInClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SignInError> {
        let http = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SignInError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Validate the pair and run the sign-in exchange.
    ///
    /// Validation failures never leave the process. A reachable server
    /// always yields an outcome, even for a wrong pair.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<SignInOutcome, SignInError> {
        if let Err(errors) = credentials.validate() {
            return Err(SignInError::Validation(field_messages(&errors)));
        }

        let request = SignInRequest::from(credentials);
        let response = self
            .http
            .post(self.endpoint("/auth/callback/credentials"))
            .json(&request)
            .send()
            .await
            .map_err(|e| SignInError::Transport(format!("POST /auth/callback/credentials failed: {e}")))?;

        let status = response.status();
        let session_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(session_cookie_pair);

        match status {
            StatusCode::OK => {
                let body: SignInResponse = json_body(response).await?;
                Ok(SignInOutcome::SignedIn {
                    url: body.url.unwrap_or_else(|| "/".to_string()),
                    session_cookie,
                })
            }
            StatusCode::UNAUTHORIZED => {
                let body: SignInResponse = json_body(response).await?;
                Ok(SignInOutcome::Rejected {
                    error: body.error.unwrap_or_else(|| "invalid credentials".to_string()),
                })
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let body: ValidationErrorResponse = json_body(response).await?;
                Err(SignInError::Validation(body.errors))
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(SignInError::Transport(format!(
                    "sign-in returned {status}: {body}"
                )))
            }
        }
    }

    /// Look up the session behind a cookie pair from [`SignInOutcome::SignedIn`].
    ///
    /// `None` means signed out, exactly as the endpoint's `null` body does.
    pub async fn session(
        &self,
        session_cookie: &str,
    ) -> Result<Option<SessionResponse>, SignInError> {
        let response = self
            .http
            .get(self.endpoint("/auth/session"))
            .header(header::COOKIE, session_cookie)
            .send()
            .await
            .map_err(|e| SignInError::Transport(format!("GET /auth/session failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SignInError::Transport(format!(
                "session lookup returned {status}"
            )));
        }

        json_body(response).await
    }

    /// End the session. Returns the sign-in page URL the server points at.
    pub async fn sign_out(&self) -> Result<String, SignInError> {
        let response = self
            .http
            .post(self.endpoint("/auth/signout"))
            .send()
            .await
            .map_err(|e| SignInError::Transport(format!("POST /auth/signout failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SignInError::Transport(format!(
                "sign-out returned {status}"
            )));
        }

        let body: SignInResponse = json_body(response).await?;
        Ok(body.url.unwrap_or_else(|| "/auth/signin".to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Reduce a `Set-Cookie` value to its `session_token=<value>` pair.
fn session_cookie_pair(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    if name == SESSION_COOKIE && !value.is_empty() {
        Some(pair.to_string())
    } else {
        None
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SignInError> {
    response
        .json()
        .await
        .map_err(|e| SignInError::InvalidResponse(e.to_string()))
}
