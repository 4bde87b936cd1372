// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Credential sign-in and cookie sessions for the sign-in service.
//!
//! ## Auth Flow
//!
//! 1. The sign-in page validates the form and POSTs the pair to
//!    `/auth/callback/credentials`
//! 2. Server:
//!    - Re-validates the payload against the same schema
//!    - Checks the pair against the [`store::CredentialStore`]
//!    - Issues an HS256 session JWT and sets it as an `HttpOnly` cookie
//! 3. Later requests carry the cookie; extractors verify the token and
//!    expose the claims to handlers
//!
//! ## Security
//!
//! - Credential rejections never say which half of the pair was wrong
//! - Session tokens are signed with the shared `SESSION_SECRET`
//! - The cookie is `HttpOnly` and `SameSite=Lax`
//! - Clock skew tolerance is 60 seconds

pub mod cookie;
pub mod credentials;
pub mod error;
pub mod extractor;
pub mod session;
pub mod store;

pub use credentials::Credentials;
pub use error::AuthError;
pub use extractor::{CurrentSession, RequireSession};
pub use session::{SessionClaims, SessionIssuer};
pub use store::{CredentialStore, Identity, SingleUserStore};
