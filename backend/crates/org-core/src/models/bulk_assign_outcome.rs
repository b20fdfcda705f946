use crate::HierarchyError;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkFailure {
    pub node_id: Uuid,
    pub code: String,
    pub reason: String,
}

impl BulkFailure {
    pub fn new(node_id: Uuid, error: &HierarchyError) -> Self {
        Self {
            node_id,
            code: error.error_code().to_string(),
            reason: error.to_string(),
        }
    }
}

/// Per-node report of a best-effort bulk assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkAssignOutcome {
    pub total: usize,
    pub success_count: usize,
    pub fail_count: usize,
    /// Failures in selection order.
    pub errors: Vec<BulkFailure>,
}

impl BulkAssignOutcome {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, node_id: Uuid, error: &HierarchyError) {
        self.fail_count += 1;
        self.errors.push(BulkFailure::new(node_id, error));
    }

    pub fn failed_ids(&self) -> Vec<Uuid> {
        self.errors.iter().map(|failure| failure.node_id).collect()
    }
}
