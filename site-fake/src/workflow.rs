//! Site linkage workflow entity
//!
//! One record per site, keyed by the caller-supplied site uuid. Re-posting
//! a workflow for the same site overwrites the record and restarts the
//! activation gate. Activation is derived from elapsed wall-clock time,
//! never from any real installation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Seconds a site polls as inactive before the simulated installation
/// reads as active.
pub const ACTIVE_AFTER_SECS: f64 = 15.0;

/// Placeholder OAuth link; only the GitHub slot is ever populated.
pub const GITHUB_OAUTH_LINK: &str = "https://github.com/login/oauth/authorize";

/// The simulated installation id reported for every site.
pub const VCS_INSTALLATION_ID: &str = "1";

/// Static placeholder OAuth links returned with every workflow.
#[derive(Debug, Clone, Serialize)]
pub struct VcsAuthLinks {
    pub github_oauth: String,
    pub gitlab_oauth: Option<String>,
    pub bitbucket_oauth: Option<String>,
}

impl Default for VcsAuthLinks {
    fn default() -> Self {
        Self {
            github_oauth: GITHUB_OAUTH_LINK.to_string(),
            gitlab_oauth: None,
            bitbucket_oauth: None,
        }
    }
}

/// A stored site linkage workflow.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowRecord {
    pub site_details_id: String,
    pub workflow_id: String,
    pub timestamp: f64,
    pub vcs_auth_links: VcsAuthLinks,
}

impl WorkflowRecord {
    pub fn new(site_details_id: String, workflow_id: String, timestamp: f64) -> Self {
        Self {
            site_details_id,
            workflow_id,
            timestamp,
            vcs_auth_links: VcsAuthLinks::default(),
        }
    }
}

/// Unix epoch seconds with fractional part, the wire format for timestamps.
pub fn unix_seconds(t: DateTime<Utc>) -> f64 {
    t.timestamp_micros() as f64 / 1_000_000.0
}

/// Whether a site's installation reads as active `now - created_at`
/// seconds after its workflow was created.
///
/// The threshold is strict: a site polled at exactly the threshold is
/// still inactive.
pub fn derive_is_active(now: f64, created_at: f64, threshold_secs: f64) -> bool {
    now - created_at > threshold_secs
}
