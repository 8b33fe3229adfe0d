//! VCS-Site fake
//!
//! Stand-in for the site-to-VCS installation linkage of a third-party
//! provider. Integration tests post a workflow for a site, then poll the
//! site details until the simulated installation reads as active, 15
//! seconds after creation. State lives in memory for the lifetime of the
//! process.

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
        .route("/vcs/v1/workflow", post(handlers::post_workflow))
        .route(
            "/vcs/v1/site-details/:id",
            get(handlers::get_site_details).delete(handlers::cleanup_site_details),
        )
        .route("/vcs/v1/repo-initialize", post(handlers::repo_initialize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vcs_site_fake=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting VCS-Site fake...");

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
