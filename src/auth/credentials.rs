// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sign-in form credentials and their validation schema.
//!
//! The same minimum-length rule applies on every surface: the sign-in page
//! checks it before submitting, the typed client checks it before issuing a
//! request, and the server re-checks the raw payload because client-side
//! validation is a UX convenience, not a trust boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Minimum accepted length for both the username and the password.
pub const CREDENTIAL_MIN_LEN: usize = 4;

/// Username/password pair captured by the sign-in form.
///
/// Ephemeral: built at submit time, dropped after the authorization call.
/// The username is submitted to the exchange as the `email` field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Credentials {
    /// Account name entered in the form (an email address in practice).
    #[validate(length(min = 4, message = "must be at least 4 characters"))]
    pub username: String,

    /// Plaintext password entered in the form.
    #[validate(length(min = 4, message = "must be at least 4 characters"))]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Flatten [`ValidationErrors`] into a `field -> messages` map.
///
/// The map is what the 422 response body carries and what gets rendered next
/// to the offending field. Ordered so response bodies are deterministic.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut fields = BTreeMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }
    fields
}
