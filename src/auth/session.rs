// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token issuance and verification.
//!
//! Sessions are stateless HS256 JWTs signed with the shared
//! `SESSION_SECRET`. No session table exists: the signed token in the
//! browser cookie is the whole session record, so a restart keeps every
//! session alive as long as the secret is stable.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::AuthError;
use super::store::Identity;
use crate::config::AuthOptions;

/// Clock skew allowance when validating `exp` (seconds).
pub const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Claims carried in a session token.
///
/// Profile claims (`name`, `email`, `role`) are copied from the identity at
/// issuance and travel with the token. An identity without a role produces a
/// token without a `role` claim, not a `null` one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionClaims {
    /// Subject: the account's stable identifier.
    pub sub: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Role label, passed through verbatim from the identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp).
    pub exp: i64,

    /// Token identifier, fresh per issued token.
    pub jti: String,
}

impl SessionClaims {
    /// Build claims for a just-authorized identity.
    fn for_identity(identity: &Identity, ttl_secs: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: identity.id.clone(),
            name: Some(identity.name.clone()),
            email: Some(identity.email.clone()),
            role: identity.role.clone(),
            iat: now,
            exp: now + ttl_secs as i64,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Seconds the token has left before `exp`, clamped at zero.
    pub fn remaining_secs(&self) -> u64 {
        (self.exp - Utc::now().timestamp()).max(0) as u64
    }
}

/// Signing key pair derived from the session secret.
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs and verifies session tokens.
///
/// Cheap to clone: the derived keys live behind an [`Arc`], so every clone
/// shares them.
#[derive(Clone)]
pub struct SessionIssuer {
    keys: Arc<SigningKeys>,
    ttl_secs: u64,
    refresh_age_secs: u64,
}

impl SessionIssuer {
    pub fn new(options: &AuthOptions) -> Self {
        let secret = options.session_secret.as_bytes();
        Self {
            keys: Arc::new(SigningKeys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            ttl_secs: options.session_ttl_secs,
            refresh_age_secs: options.session_refresh_secs,
        }
    }

    /// Session lifetime in seconds. Also the cookie's `Max-Age`.
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a fresh session for an authorized identity.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedSession, AuthError> {
        let claims = SessionClaims::for_identity(identity, self.ttl_secs);
        let token = self.sign(&claims)?;
        Ok(IssuedSession { token, claims })
    }

    /// Re-issue a session from existing claims.
    ///
    /// Profile claims carry over unchanged; `iat`, `exp` and `jti` are
    /// minted fresh, sliding the expiry forward by a full TTL.
    pub fn refresh(&self, claims: &SessionClaims) -> Result<IssuedSession, AuthError> {
        let now = Utc::now().timestamp();
        let refreshed = SessionClaims {
            sub: claims.sub.clone(),
            name: claims.name.clone(),
            email: claims.email.clone(),
            role: claims.role.clone(),
            iat: now,
            exp: now + self.ttl_secs as i64,
            jti: Uuid::new_v4().to_string(),
        };
        let token = self.sign(&refreshed)?;
        Ok(IssuedSession {
            token,
            claims: refreshed,
        })
    }

    /// Whether a token is old enough for the rolling re-issue on lookup.
    pub fn needs_refresh(&self, claims: &SessionClaims) -> bool {
        Utc::now().timestamp() - claims.iat >= self.refresh_age_secs as i64
    }

    /// Verify a token's signature and expiry and return its claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;

        match decode::<SessionClaims>(token, &self.keys.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => Err(match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            }),
        }
    }

    /// Signing check used by the readiness probe: issue and verify a
    /// throwaway token with the live keys.
    pub fn self_check(&self) -> Result<(), AuthError> {
        let probe = Identity {
            id: "readiness-probe".to_string(),
            name: "probe".to_string(),
            email: "probe@localhost".to_string(),
            role: None,
        };
        let issued = self.issue(&probe)?;
        self.verify(&issued.token).map(|_| ())
    }

    fn sign(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.keys.encoding)
            .map_err(|e| AuthError::SigningError(e.to_string()))
    }
}

/// A signed token together with the claims inside it.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub claims: SessionClaims,
}
