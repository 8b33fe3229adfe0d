//! Authorization workflow entity
//!
//! One record per simulated OAuth handshake, keyed by a generated workflow
//! id. Status is derived from elapsed wall-clock time, never from any real
//! authorization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds a workflow polls as pending before completing.
pub const AUTH_COMPLETE_AFTER_SECS: f64 = 30.0;

/// Placeholder link callers would be redirected to in a real handshake.
pub const VCS_AUTH_LINK: &str = "https://github.com";
pub const VCS_TYPE: &str = "github";
pub const FAKE_SITE_UUID: &str = "FAKE_SITE_UUID";

/// Simulated handshake status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    AuthPending,
    AuthComplete,
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowStatus::AuthPending => write!(f, "auth_pending"),
            WorkflowStatus::AuthComplete => write!(f, "auth_complete"),
        }
    }
}

/// A stored authorization workflow, serialized verbatim as the response
/// body of both endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowRecord {
    pub timestamp: f64,
    pub vcs_auth_link: String,
    pub vcs_type: String,
    pub workflow_id: String,
    pub site_uuid: String,
    pub status: WorkflowStatus,
}

impl WorkflowRecord {
    pub fn new(workflow_id: String, timestamp: f64) -> Self {
        Self {
            timestamp,
            vcs_auth_link: VCS_AUTH_LINK.to_string(),
            vcs_type: VCS_TYPE.to_string(),
            workflow_id,
            site_uuid: FAKE_SITE_UUID.to_string(),
            status: WorkflowStatus::AuthPending,
        }
    }
}

/// Unix epoch seconds with fractional part, the wire format for timestamps.
pub fn unix_seconds(t: DateTime<Utc>) -> f64 {
    t.timestamp_micros() as f64 / 1_000_000.0
}

/// Status a workflow reports `now - created_at` seconds after creation.
///
/// The threshold is strict: a workflow polled at exactly the threshold is
/// still pending.
pub fn derive_status(now: f64, created_at: f64, threshold_secs: f64) -> WorkflowStatus {
    if now - created_at > threshold_secs {
        WorkflowStatus::AuthComplete
    } else {
        WorkflowStatus::AuthPending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_until_threshold() {
        assert_eq!(
            derive_status(100.0, 100.0, AUTH_COMPLETE_AFTER_SECS),
            WorkflowStatus::AuthPending
        );
        assert_eq!(
            derive_status(129.9, 100.0, AUTH_COMPLETE_AFTER_SECS),
            WorkflowStatus::AuthPending
        );
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(
            derive_status(130.0, 100.0, AUTH_COMPLETE_AFTER_SECS),
            WorkflowStatus::AuthPending
        );
        assert_eq!(
            derive_status(130.1, 100.0, AUTH_COMPLETE_AFTER_SECS),
            WorkflowStatus::AuthComplete
        );
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(WorkflowStatus::AuthPending).unwrap(),
            serde_json::json!("auth_pending")
        );
        assert_eq!(
            serde_json::to_value(WorkflowStatus::AuthComplete).unwrap(),
            serde_json::json!("auth_complete")
        );
    }

    #[test]
    fn new_record_carries_fixed_fields() {
        let record = WorkflowRecord::new("wf-1".to_string(), 42.5);
        assert_eq!(record.vcs_auth_link, VCS_AUTH_LINK);
        assert_eq!(record.vcs_type, VCS_TYPE);
        assert_eq!(record.site_uuid, FAKE_SITE_UUID);
        assert_eq!(record.status, WorkflowStatus::AuthPending);
        assert_eq!(record.timestamp, 42.5);
    }
}
