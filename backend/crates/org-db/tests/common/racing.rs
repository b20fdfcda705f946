#![allow(dead_code)]

use org_core::{ForestSnapshot, Node, NodeStore, StoreResult};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Barrier;
use uuid::Uuid;

/// Holds the first `parties` snapshot readers until all of them have read,
/// so racing writers validate against the same revision
pub struct SnapshotBarrierStore<S> {
    inner: S,
    barrier: Barrier,
    parties: usize,
    arrived: AtomicUsize,
}

impl<S> SnapshotBarrierStore<S> {
    pub fn new(inner: S, parties: usize) -> Self {
        Self {
            inner,
            barrier: Barrier::new(parties),
            parties,
            arrived: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl<S: NodeStore> NodeStore for SnapshotBarrierStore<S> {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Node>> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> StoreResult<ForestSnapshot> {
        let snapshot = self.inner.find_all().await?;
        if self.arrived.fetch_add(1, Ordering::SeqCst) < self.parties {
            self.barrier.wait().await;
        }
        Ok(snapshot)
    }

    async fn set_parent_if_revision(
        &self,
        node_id: Uuid,
        parent_id: Uuid,
        expected_revision: u64,
    ) -> StoreResult<u64> {
        self.inner
            .set_parent_if_revision(node_id, parent_id, expected_revision)
            .await
    }

    async fn clear_parent(&self, node_id: Uuid) -> StoreResult<bool> {
        self.inner.clear_parent(node_id).await
    }
}
