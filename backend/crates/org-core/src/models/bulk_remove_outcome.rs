use crate::BulkFailure;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkRemoveOutcome {
    pub total: usize,
    /// Nodes that actually lost a manager; nodes already at root are not counted.
    pub updated_count: usize,
    pub not_found: Vec<Uuid>,
    /// Store failures, one per affected node.
    pub errors: Vec<BulkFailure>,
}
