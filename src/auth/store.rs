// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential authorization against the configured account.
//!
//! [`CredentialStore`] is the trust boundary of the sign-in exchange: it is
//! the only component that ever sees the submitted password. Everything
//! upstream (form, client, handler) treats the pair as opaque strings.

use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::error::AuthError;

/// Profile of an account that passed a credential check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Identity {
    /// Stable account identifier, carried into the session `sub` claim.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Role label, if the account carries one. Kept as a plain string so
    /// labels this service does not know about pass through untouched.
    pub role: Option<String>,
}

/// Source of truth for credential checks.
pub trait CredentialStore: Send + Sync {
    /// Check an email/password pair and return the account's identity.
    ///
    /// Every rejection is [`AuthError::InvalidCredentials`]. The error never
    /// reveals which half of the pair was wrong, or whether the account
    /// exists at all.
    fn authorize(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Store holding exactly one account with a fixed password.
///
/// This is the demo deployment's store. Real deployments swap in their own
/// [`CredentialStore`] behind the same trait.
#[derive(Debug, Clone)]
pub struct SingleUserStore {
    email: String,
    password: String,
    identity: Identity,
}

impl SingleUserStore {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        identity: Identity,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            identity,
        }
    }

    /// The stock demo account.
    pub fn demo() -> Self {
        Self::new(
            "john@gmail.com",
            "1234",
            Identity {
                id: "1234".to_string(),
                name: "John Doe".to_string(),
                email: "john@gmail.com".to_string(),
                role: Some("admin".to_string()),
            },
        )
    }
}

impl Default for SingleUserStore {
    fn default() -> Self {
        Self::demo()
    }
}

impl CredentialStore for SingleUserStore {
    fn authorize(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        // Both halves must match exactly. Comparison is case sensitive.
        if email == self.email && password == self.password {
            Ok(self.identity.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_pair_returns_the_identity() {
        let store = SingleUserStore::demo();
        let identity = store.authorize("john@gmail.com", "1234").expect("authorized");

        assert_eq!(identity.id, "1234");
        assert_eq!(identity.name, "John Doe");
        assert_eq!(identity.email, "john@gmail.com");
        assert_eq!(identity.role.as_deref(), Some("admin"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let store = SingleUserStore::demo();
        let err = store
            .authorize("john@gmail.com", "12345")
            .expect_err("wrong password");
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn unknown_email_is_rejected_with_the_same_error() {
        let store = SingleUserStore::demo();
        let err = store
            .authorize("jane@gmail.com", "1234")
            .expect_err("unknown account");
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let store = SingleUserStore::demo();
        assert!(store.authorize("John@Gmail.com", "1234").is_err());
    }

    #[test]
    fn empty_pair_is_rejected() {
        let store = SingleUserStore::demo();
        assert!(store.authorize("", "").is_err());
    }

    #[test]
    fn custom_account_and_roleless_identity() {
        let store = SingleUserStore::new(
            "ops@example.com",
            "hunter2222",
            Identity {
                id: "7".to_string(),
                name: "Ops".to_string(),
                email: "ops@example.com".to_string(),
                role: None,
            },
        );

        let identity = store.authorize("ops@example.com", "hunter2222").expect("authorized");
        assert_eq!(identity.role, None);
    }
}
