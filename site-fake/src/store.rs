//! In-memory workflow store
//!
//! Keyed by site uuid. Inserting for an existing site replaces the record,
//! which is what restarts the activation gate. Records are never removed;
//! the cleanup endpoint deliberately leaves the map untouched. Locks are
//! scoped to a single call and never held across an await.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::workflow::WorkflowRecord;

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
        workflows.insert(record.site_details_id.clone(), record);
    }

    pub fn get(&self, site_details_id: &str) -> Option<WorkflowRecord> {
        let workflows = self.workflows.read().unwrap();
        workflows.get(site_details_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_inserted_record() {
        let store = WorkflowStore::new();
        store.insert(WorkflowRecord::new(
            "site-1".to_string(),
            "wf-1".to_string(),
            10.0,
        ));

        let record = store.get("site-1").unwrap();
        assert_eq!(record.workflow_id, "wf-1");
        assert_eq!(record.timestamp, 10.0);
    }

    #[test]
    fn get_unknown_site_is_none() {
        let store = WorkflowStore::new();
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn reinsert_overwrites_prior_record() {
        let store = WorkflowStore::new();
        store.insert(WorkflowRecord::new(
            "site-1".to_string(),
            "wf-1".to_string(),
            10.0,
        ));
        store.insert(WorkflowRecord::new(
            "site-1".to_string(),
            "wf-2".to_string(),
            50.0,
        ));

        // The overwrite resets the stored timestamp, and with it the gate.
        let record = store.get("site-1").unwrap();
        assert_eq!(record.workflow_id, "wf-2");
        assert_eq!(record.timestamp, 50.0);
    }
}
