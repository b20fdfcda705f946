use crate::{StoreResult, WorkItemCounts};

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

/// External owner of work items (leads, projects) attributed to users.
#[async_trait]
pub trait WorkItemSource: Send + Sync {
    /// Counts for every requested id in one batch. Ids without work items
    /// may be absent from the map.
    async fn counts_for(&self, node_ids: &[Uuid]) -> StoreResult<HashMap<Uuid, WorkItemCounts>>;
}
