//! HTTP handlers
//!
//! Axum request handlers for the site linkage fake.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::workflow::{self, WorkflowRecord, ACTIVE_AFTER_SECS, VCS_INSTALLATION_ID};
use crate::AppState;

/// List envelope wrapping every JSON response of this service
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// Request body for creating a site workflow
#[derive(Debug, Deserialize)]
pub struct PostWorkflowRequest {
    #[serde(default)]
    pub site_uuid: Option<String>,
}

/// Response row for site details polls
#[derive(Debug, Serialize)]
pub struct SiteDetails {
    pub site_details_id: String,
    pub is_active: bool,
    pub vcs_installation_id: String,
}

/// POST /vcs/v1/workflow
///
/// Create a workflow for the site, replacing any prior one and restarting
/// the activation gate.
pub async fn post_workflow(
    State(state): State<AppState>,
    body: Result<Json<PostWorkflowRequest>, JsonRejection>,
) -> Result<Json<DataEnvelope<WorkflowRecord>>, ApiError> {
    let Json(request) =
        body.map_err(|_| ApiError::InvalidRequest("Request body must be json".to_string()))?;

    let site_uuid = match request.site_uuid.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return Err(ApiError::InvalidRequest(
                "site_uuid is required".to_string(),
            ))
        }
    };

    let record = WorkflowRecord::new(
        site_uuid,
        Uuid::new_v4().to_string(),
        workflow::unix_seconds(state.clock.now()),
    );
    state.store.insert(record.clone());

    tracing::info!(site_details_id = %record.site_details_id, "site workflow created");

    Ok(Json(DataEnvelope { data: vec![record] }))
}

/// GET /vcs/v1/site-details/:id
///
/// Polling this reports the installation inactive for 15 seconds after the
/// workflow is created, then active.
pub async fn get_site_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope<SiteDetails>>, ApiError> {
    let record = state
        .store
        .get(&id)
        .ok_or_else(|| ApiError::NotFound("Site details not found".to_string()))?;

    let now = workflow::unix_seconds(state.clock.now());
    let is_active = workflow::derive_is_active(now, record.timestamp, ACTIVE_AFTER_SECS);

    Ok(Json(DataEnvelope {
        data: vec![SiteDetails {
            site_details_id: record.site_details_id,
            is_active,
            vcs_installation_id: VCS_INSTALLATION_ID.to_string(),
        }],
    }))
}

/// POST /vcs/v1/repo-initialize
///
/// Acknowledges any JSON body with an empty 200. No state is read or
/// written.
pub async fn repo_initialize(
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(), ApiError> {
    body.map_err(|_| ApiError::InvalidRequest("Request body must be json".to_string()))?;

    Ok(())
}

/// DELETE /vcs/v1/site-details/:id
///
/// Acknowledges cleanup by echoing the id as plain text. The record stays
/// in the store, so later polls for the site still resolve.
pub async fn cleanup_site_details(Path(id): Path<String>) -> String {
    tracing::debug!(site_details_id = %id, "site details cleanup acknowledged");

    id
}
