//! HTTP handlers
//!
//! Axum request handlers for the authorization fake.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::workflow::{self, WorkflowRecord, WorkflowStatus, AUTH_COMPLETE_AFTER_SECS};
use crate::AppState;

/// Request body for starting an authorization handshake
#[derive(Debug, Deserialize)]
pub struct AuthorizeRequest {
    #[serde(default)]
    pub vcs_organization: Option<String>,
}

/// POST /vcs-auth/v1/authorize
///
/// Create a workflow in `auth_pending` and return the full record.
pub async fn authorize(
    State(state): State<AppState>,
    body: Result<Json<AuthorizeRequest>, JsonRejection>,
) -> Result<Json<WorkflowRecord>, ApiError> {
    let Json(request) =
        body.map_err(|_| ApiError::InvalidRequest("Request body must be json".to_string()))?;

    // Missing, null, and empty all fail the same way.
    if request.vcs_organization.as_deref().unwrap_or("").is_empty() {
        return Err(ApiError::InvalidRequest(
            "vcs_organization is required".to_string(),
        ));
    }

    let workflow_id = Uuid::new_v4().to_string();
    let record = WorkflowRecord::new(workflow_id, workflow::unix_seconds(state.clock.now()));
    state.store.insert(record.clone());

    tracing::info!(workflow_id = %record.workflow_id, "authorization workflow created");

    Ok(Json(record))
}

/// GET /vcs-auth/v1/workflows/:id
///
/// Polling this returns `auth_pending` for 30 seconds after creation, then
/// `auth_complete`. The flip is written back into the store, so it never
/// reverts.
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkflowRecord>, ApiError> {
    let record = state
        .store
        .get(&id)
        .ok_or_else(|| ApiError::NotFound("Workflow not found".to_string()))?;

    if record.status == WorkflowStatus::AuthComplete {
        return Ok(Json(record));
    }

    let now = workflow::unix_seconds(state.clock.now());
    match workflow::derive_status(now, record.timestamp, AUTH_COMPLETE_AFTER_SECS) {
        WorkflowStatus::AuthComplete => {
            let updated = state
                .store
                .mark_complete(&id)
                .ok_or_else(|| ApiError::NotFound("Workflow not found".to_string()))?;

            tracing::debug!(workflow_id = %id, "authorization workflow completed");

            Ok(Json(updated))
        }
        WorkflowStatus::AuthPending => Ok(Json(record)),
    }
}
