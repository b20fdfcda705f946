//! In-process store and work-item source.
//!
//! Used for embedding the engine without a database and as the test
//! double for everything above the store boundary.

use crate::{
    ForestSnapshot, Node, NodeStore, StoreError, StoreResult, WorkItemCounts, WorkItemSource,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct MemoryForest {
    revision: u64,
    order: Vec<Uuid>,
    nodes: HashMap<Uuid, Node>,
}

#[derive(Default)]
pub struct InMemoryNodeStore {
    forest: RwLock<MemoryForest>,
    unavailable: AtomicBool,
}

impl InMemoryNodeStore {
    pub fn with_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut forest = MemoryForest::default();
        for node in nodes {
            forest.order.push(node.id);
            forest.nodes.insert(node.id, node);
        }
        Self {
            forest: RwLock::new(forest),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Rewrites a parent pointer with no checks and no revision bump, the
    /// way an out-of-band write would.
    pub async fn overwrite_parent_unchecked(&self, node_id: Uuid, parent_id: Option<Uuid>) {
        if let Some(node) = self.forest.write().await.nodes.get_mut(&node_id) {
            node.parent_id = parent_id;
        }
    }

    /// Makes every following call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn revision(&self) -> u64 {
        self.forest.read().await.revision
    }

    #[track_caller]
    fn ensure_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("in-memory store marked unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl NodeStore for InMemoryNodeStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Node>> {
        self.ensure_available()?;
        Ok(self.forest.read().await.nodes.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<ForestSnapshot> {
        self.ensure_available()?;
        let forest = self.forest.read().await;
        Ok(ForestSnapshot {
            revision: forest.revision,
            nodes: forest
                .order
                .iter()
                .filter_map(|id| forest.nodes.get(id).cloned())
                .collect(),
        })
    }

    async fn set_parent_if_revision(
        &self,
        node_id: Uuid,
        parent_id: Uuid,
        expected_revision: u64,
    ) -> StoreResult<u64> {
        self.ensure_available()?;
        let mut forest = self.forest.write().await;

        if forest.revision != expected_revision {
            return Err(StoreError::Conflict {
                expected: expected_revision,
                actual: forest.revision,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let node = forest
            .nodes
            .get_mut(&node_id)
            .ok_or_else(|| StoreError::NotFound {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            })?;
        node.parent_id = Some(parent_id);
        forest.revision += 1;

        Ok(forest.revision)
    }

    async fn clear_parent(&self, node_id: Uuid) -> StoreResult<bool> {
        self.ensure_available()?;
        let mut forest = self.forest.write().await;

        let node = forest
            .nodes
            .get_mut(&node_id)
            .ok_or_else(|| StoreError::NotFound {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            })?;
        let changed = node.parent_id.take().is_some();
        if changed {
            forest.revision += 1;
        }

        Ok(changed)
    }
}

#[derive(Default)]
pub struct InMemoryWorkItemSource {
    counts: RwLock<HashMap<Uuid, WorkItemCounts>>,
    calls: AtomicUsize,
}

impl InMemoryWorkItemSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_counts(&self, node_id: Uuid, owned: u64, assigned: u64) {
        self.counts
            .write()
            .await
            .insert(node_id, WorkItemCounts { owned, assigned });
    }

    /// Number of batch lookups served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkItemSource for InMemoryWorkItemSource {
    async fn counts_for(&self, node_ids: &[Uuid]) -> StoreResult<HashMap<Uuid, WorkItemCounts>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let counts = self.counts.read().await;
        Ok(node_ids
            .iter()
            .filter_map(|id| counts.get(id).map(|c| (*id, *c)))
            .collect())
    }
}
