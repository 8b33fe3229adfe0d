//! In-memory workflow store
//!
//! State lives for the lifetime of the process; records are never removed.
//! The map is behind an `RwLock` because axum dispatches handlers across
//! the runtime's worker threads. Locks are scoped to a single call and
//! never held across an await.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::workflow::{WorkflowRecord, WorkflowStatus};

#[derive(Default)]
pub struct WorkflowStore {
    workflows: RwLock<HashMap<String, WorkflowRecord>>,
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: WorkflowRecord) {
        let mut workflows = self.workflows.write().unwrap();
        workflows.insert(record.workflow_id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<WorkflowRecord> {
        let workflows = self.workflows.read().unwrap();
        workflows.get(id).cloned()
    }

    /// Persist `auth_complete` for `id` and return the updated record.
    ///
    /// This is the only in-place mutation in the service; once written the
    /// status never reverts.
    pub fn mark_complete(&self, id: &str) -> Option<WorkflowRecord> {
        let mut workflows = self.workflows.write().unwrap();
        let record = workflows.get_mut(id)?;
        record.status = WorkflowStatus::AuthComplete;
        Some(record.clone())
    }
}
