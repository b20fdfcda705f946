//! Persistence boundary for user records.
//!
//! The engine only ever reads nodes and rewrites `parent_id`. Writes that
//! depend on a validation result carry the revision the validation saw, so
//! the store can refuse them when the forest moved in between.

use crate::{Node, StoreResult};

use async_trait::async_trait;
use uuid::Uuid;

/// Every node of the forest as of one store revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForestSnapshot {
    pub revision: u64,
    pub nodes: Vec<Node>,
}

#[async_trait]
pub trait NodeStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Node>>;

    /// All nodes, read consistently with the revision they belong to.
    async fn find_all(&self) -> StoreResult<ForestSnapshot>;

    /// Points `node_id` at `parent_id` if the store is still at
    /// `expected_revision`, returning the new revision.
    ///
    /// Fails with `StoreError::Conflict` when any hierarchy write landed
    /// after `expected_revision`, and `StoreError::NotFound` when the node
    /// is gone.
    async fn set_parent_if_revision(
        &self,
        node_id: Uuid,
        parent_id: Uuid,
        expected_revision: u64,
    ) -> StoreResult<u64>;

    /// Makes `node_id` a root. Returns whether it had a parent before.
    async fn clear_parent(&self, node_id: Uuid) -> StoreResult<bool>;
}
