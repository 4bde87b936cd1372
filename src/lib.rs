// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Sign-in - Credential Session Service
//!
//! This crate provides a small credential-based sign-in service: a sign-in
//! page, the credential exchange, and stateless JWT cookie sessions.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Credential checks, session tokens, cookie extractors
//! - `client` - Typed HTTP client for the service

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
