// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::session::SessionIssuer;
use crate::auth::store::{CredentialStore, SingleUserStore};
use crate::config::AuthOptions;

/// Shared application state.
///
/// Cheap to clone: every field is either an [`Arc`] or internally shared.
#[derive(Clone)]
pub struct AppState {
    pub options: Arc<AuthOptions>,
    pub store: Arc<dyn CredentialStore>,
    pub sessions: SessionIssuer,
}

impl AppState {
    pub fn new(options: AuthOptions) -> Self {
        let sessions = SessionIssuer::new(&options);
        Self {
            options: Arc::new(options),
            store: Arc::new(SingleUserStore::demo()),
            sessions,
        }
    }

    /// Swap in a different credential store.
    pub fn with_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = store;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AuthOptions::default())
    }
}
