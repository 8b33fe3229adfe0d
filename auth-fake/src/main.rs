//! VCS-Auth fake
//!
//! Stand-in for a third-party VCS authorization provider, used by
//! integration tests that poll an OAuth-style handshake. Workflows are held
//! in memory for the lifetime of the process and flip from `auth_pending`
//! to `auth_complete` on wall-clock elapse alone.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clock;
mod config;
mod error;
mod handlers;
mod store;
mod workflow;


use clock::{Clock, SystemClock};
use config::Config;
use store::WorkflowStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WorkflowStore>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. Tests mount this directly with a manual clock.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/vcs-auth/v1/authorize", post(handlers::authorize))
        .route("/vcs-auth/v1/workflows/:id", get(handlers::get_workflow))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vcs_auth_fake=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting VCS-Auth fake...");

    let config = Config::from_env();

    let state = AppState {
        store: Arc::new(WorkflowStore::new()),
        clock: Arc::new(SystemClock),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
