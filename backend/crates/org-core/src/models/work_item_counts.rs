use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Owned and assigned work items of a single node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemCounts {
    pub owned: u64,
    pub assigned: u64,
}

impl AddAssign for WorkItemCounts {
    fn add_assign(&mut self, other: Self) {
        self.owned += other.owned;
        self.assigned += other.assigned;
    }
}
