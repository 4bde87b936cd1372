// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use relational_signin_server::api::router;
use relational_signin_server::config::{AuthOptions, LOG_FORMAT_ENV, SESSION_SECRET_ENV};
use relational_signin_server::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let options = AuthOptions::from_env();
    if !options.secret_from_env {
        tracing::warn!(
            "{SESSION_SECRET_ENV} is not set; using an ephemeral secret, sessions will not survive a restart"
        );
    }

    let state = AppState::new(options);
    let app = router(state);

    // Parse bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Sign-in server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

/// Subscriber setup: `RUST_LOG` controls the filter, `LOG_FORMAT` the shape.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let subscriber = tracing_subscriber::registry().with(filter);
    match env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => subscriber.with(fmt::layer().json().with_target(true)).init(),
        _ => subscriber.with(fmt::layer().pretty().with_target(true)).init(),
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("shutdown signal received");
}
