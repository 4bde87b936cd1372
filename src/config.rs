// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! immutable [`AuthOptions`] struct built once at startup and shared by
//! reference through `AppState`.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SESSION_SECRET` | HS256 session signing secret | Ephemeral random (dev only) |
//! | `SESSION_TTL_SECS` | Session token lifetime in seconds | `2592000` (30 days) |
//! | `SESSION_REFRESH_SECS` | Token age after which lookup re-issues | `86400` (24 hours) |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the HS256 session signing secret.
///
/// When unset, `AuthOptions::from_env` generates an ephemeral secret so the
/// server still starts in development; sessions then do not survive a restart.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Environment variable name for the session token lifetime in seconds.
pub const SESSION_TTL_ENV: &str = "SESSION_TTL_SECS";

/// Environment variable name for the refresh age in seconds.
pub const SESSION_REFRESH_ENV: &str = "SESSION_REFRESH_SECS";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default session token lifetime: 30 days.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Default refresh age: a session older than this is re-issued on lookup.
pub const DEFAULT_SESSION_REFRESH_SECS: u64 = 24 * 60 * 60;

/// Path of the sign-in page, used to route unauthenticated visitors.
pub const SIGN_IN_PAGE: &str = "/auth/signin";

/// Redirect target after a successful sign-in.
pub const HOME_PAGE: &str = "/";

/// Process-wide authentication configuration.
///
/// Constructed once in `main` from the environment, then shared immutably.
/// Nothing mutates an `AuthOptions` after construction.
#[derive(Debug, Clone)]
pub struct AuthOptions {
    /// HS256 signing secret for session tokens.
    pub session_secret: String,
    /// Session token lifetime in seconds.
    pub session_ttl_secs: u64,
    /// Token age in seconds after which a lookup re-issues the cookie.
    pub session_refresh_secs: u64,
    /// Whether the secret came from the environment (false = ephemeral).
    pub secret_from_env: bool,
}

impl AuthOptions {
    /// Build options from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let (session_secret, secret_from_env) = match env::var(SESSION_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => (secret, true),
            _ => (ephemeral_secret(), false),
        };

        Self {
            session_secret,
            session_ttl_secs: env_u64_or(SESSION_TTL_ENV, DEFAULT_SESSION_TTL_SECS),
            session_refresh_secs: env_u64_or(SESSION_REFRESH_ENV, DEFAULT_SESSION_REFRESH_SECS),
            secret_from_env,
        }
    }

    /// Options with a caller-supplied secret and default lifetimes.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            session_secret: secret.into(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            session_refresh_secs: DEFAULT_SESSION_REFRESH_SECS,
            secret_from_env: true,
        }
    }
}

impl Default for AuthOptions {
    /// Ephemeral-secret options for tests and local development.
    fn default() -> Self {
        Self {
            session_secret: ephemeral_secret(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            session_refresh_secs: DEFAULT_SESSION_REFRESH_SECS,
            secret_from_env: false,
        }
    }
}

/// Random secret for processes started without `SESSION_SECRET`.
fn ephemeral_secret() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}

fn env_u64_or(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_secret_uses_default_lifetimes() {
        let options = AuthOptions::with_secret("test-secret");
        assert_eq!(options.session_secret, "test-secret");
        assert_eq!(options.session_ttl_secs, DEFAULT_SESSION_TTL_SECS);
        assert_eq!(options.session_refresh_secs, DEFAULT_SESSION_REFRESH_SECS);
        assert!(options.secret_from_env);
    }

    #[test]
    fn default_generates_an_ephemeral_secret() {
        let a = AuthOptions::default();
        let b = AuthOptions::default();
        assert!(!a.secret_from_env);
        assert_eq!(a.session_secret.len(), 64);
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn page_paths_match_the_configured_routes() {
        assert_eq!(SIGN_IN_PAGE, "/auth/signin");
        assert_eq!(HOME_PAGE, "/");
    }
}
