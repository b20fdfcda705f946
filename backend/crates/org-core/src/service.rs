//! The surface exposed to administrative tooling.
//!
//! Reads fetch a fresh snapshot per call and are not linearizable with
//! concurrent writes; nothing is cached between calls.

use crate::hierarchy::{
    chain_resolver::ChainResolver, node_index::NodeIndex, stats_aggregator::StatsAggregator,
    tree_builder::TreeBuilder,
};
use crate::{
    Actor, AssignOutcome, AssignmentCheck, BulkAssignOutcome, BulkRemoveOutcome, ChainEntry,
    EngineOptions, HierarchyError, HierarchyResult, Node, NodeStore, ReassignmentEngine,
    SubtreeStats, TeamMember, TreeNode, WorkItemSource,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::debug;
use uuid::Uuid;

pub struct HierarchyService<S: NodeStore + ?Sized, W: WorkItemSource + ?Sized> {
    store: Arc<S>,
    work_items: Arc<W>,
    engine: ReassignmentEngine<S>,
}

impl<S: NodeStore + ?Sized, W: WorkItemSource + ?Sized> HierarchyService<S, W> {
    pub fn new(store: Arc<S>, work_items: Arc<W>, options: EngineOptions) -> Self {
        let engine = ReassignmentEngine::new(Arc::clone(&store), options);
        Self {
            store,
            work_items,
            engine,
        }
    }

    pub async fn get_node(&self, node_id: Uuid) -> HierarchyResult<Node> {
        self.store
            .find_by_id(node_id)
            .await?
            .ok_or_else(|| HierarchyError::NodeNotFound {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn get_forest(&self) -> HierarchyResult<Vec<TreeNode>> {
        let snapshot = self.store.find_all().await?;
        debug!(
            "GetForest over {} nodes at revision {}",
            snapshot.nodes.len(),
            snapshot.revision
        );
        let index = NodeIndex::build(&snapshot.nodes);
        TreeBuilder::new(&index).forest()
    }

    pub async fn get_subtree(&self, root_id: Uuid) -> HierarchyResult<TreeNode> {
        let snapshot = self.store.find_all().await?;
        let index = NodeIndex::build(&snapshot.nodes);
        TreeBuilder::new(&index).subtree(root_id)
    }

    /// `get_subtree` flattened depth-first, root first at depth 0.
    pub async fn get_team_members(&self, root_id: Uuid) -> HierarchyResult<Vec<TeamMember>> {
        Ok(self.get_subtree(root_id).await?.flatten())
    }

    pub async fn get_chain(&self, node_id: Uuid) -> HierarchyResult<Vec<ChainEntry>> {
        let snapshot = self.store.find_all().await?;
        let index = NodeIndex::build(&snapshot.nodes);
        ChainResolver::new(&index).chain(node_id)
    }

    pub async fn get_stats(&self, root_id: Uuid) -> HierarchyResult<SubtreeStats> {
        let snapshot = self.store.find_all().await?;
        let index = NodeIndex::build(&snapshot.nodes);
        StatsAggregator::new(&index, self.work_items.as_ref())
            .stats(root_id)
            .await
    }

    pub async fn validate_assignment(
        &self,
        node_id: Uuid,
        candidate_parent_id: Uuid,
    ) -> HierarchyResult<AssignmentCheck> {
        self.engine.validate(node_id, candidate_parent_id).await
    }

    pub async fn assign(
        &self,
        node_id: Uuid,
        new_parent_id: Uuid,
        actor: &Actor,
    ) -> HierarchyResult<AssignOutcome> {
        self.engine.assign(node_id, new_parent_id, actor).await
    }

    /// Relocates a manager and their whole reporting line. Same operation
    /// as `assign`, named for tooling that thinks in terms of teams.
    pub async fn move_tree(
        &self,
        manager_id: Uuid,
        new_manager_id: Uuid,
        actor: &Actor,
    ) -> HierarchyResult<AssignOutcome> {
        self.engine.assign(manager_id, new_manager_id, actor).await
    }

    pub async fn remove_parent(&self, node_id: Uuid, actor: &Actor) -> HierarchyResult<bool> {
        self.engine.remove_parent(node_id, actor).await
    }

    pub async fn bulk_assign(
        &self,
        node_ids: &[Uuid],
        new_parent_id: Uuid,
        actor: &Actor,
    ) -> HierarchyResult<BulkAssignOutcome> {
        self.engine.bulk_assign(node_ids, new_parent_id, actor).await
    }

    pub async fn bulk_remove_parent(
        &self,
        node_ids: &[Uuid],
        actor: &Actor,
    ) -> HierarchyResult<BulkRemoveOutcome> {
        self.engine.bulk_remove_parent(node_ids, actor).await
    }
}
