use crate::LeadRepository;

use org_core::{StoreResult, WorkItemCounts, WorkItemSource};

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Work-item counts backed by the `leads` table.
#[derive(Clone)]
pub struct LeadWorkItemSource {
    pool: SqlitePool,
}

impl LeadWorkItemSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkItemSource for LeadWorkItemSource {
    async fn counts_for(&self, node_ids: &[Uuid]) -> StoreResult<HashMap<Uuid, WorkItemCounts>> {
        Ok(LeadRepository::counts_for(&self.pool, node_ids).await?)
    }
}
