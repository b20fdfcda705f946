//! Single and bulk manager assignment and removal.
//!
//! ## Subtree preservation
//!
//! Reparenting writes exactly one `parent_id`. Direct reports keep pointing
//! at the moved node, so its whole reporting line moves with it without a
//! cascading write.
//!
//! ## Atomicity
//!
//! Every single-node assignment is one read-validate-write unit: the cycle
//! check runs against a snapshot and the write is conditional on the store
//! still being at that snapshot's revision. A lost race surfaces as
//! `ConcurrentModification`; the engine never retries on its own.
//!
//! Bulk calls are NOT one transaction. Each node is its own unit and a
//! failure is recorded against that node while the batch continues.

use crate::hierarchy::{cycle_validator::CycleValidator, node_index::NodeIndex};
use crate::{
    Actor, AssignOutcome, AssignmentCheck, BulkAssignOutcome, BulkFailure, BulkRemoveOutcome,
    EngineOptions, HierarchyError, HierarchyResult, NodeStore,
};

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use uuid::Uuid;

pub struct ReassignmentEngine<S: NodeStore + ?Sized> {
    store: Arc<S>,
    options: EngineOptions,
}

impl<S: NodeStore + ?Sized> ReassignmentEngine<S> {
    pub fn new(store: Arc<S>, options: EngineOptions) -> Self {
        Self { store, options }
    }

    /// Dry run of `assign`. Refusals come back as a check result; only
    /// store failures and data corruption are errors.
    pub async fn validate(
        &self,
        node_id: Uuid,
        candidate_parent_id: Uuid,
    ) -> HierarchyResult<AssignmentCheck> {
        let snapshot = self.store.find_all().await?;
        let index = NodeIndex::build(&snapshot.nodes);

        match CycleValidator::new(&index).validate(node_id, candidate_parent_id) {
            Ok(()) => Ok(AssignmentCheck::allowed()),
            Err(e) if e.is_validation() || matches!(e, HierarchyError::NodeNotFound { .. }) => {
                Ok(AssignmentCheck::refused(&e))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn assign(
        &self,
        node_id: Uuid,
        new_parent_id: Uuid,
        actor: &Actor,
    ) -> HierarchyResult<AssignOutcome> {
        authorize(actor)?;
        debug!("Assign {} -> {} by {}", node_id, new_parent_id, actor.id);
        self.assign_one(node_id, new_parent_id, actor).await
    }

    /// Makes `node_id` a root. Always legal; returns whether it had a
    /// manager before the call.
    pub async fn remove_parent(&self, node_id: Uuid, actor: &Actor) -> HierarchyResult<bool> {
        authorize(actor)?;
        debug!("RemoveParent {} by {}", node_id, actor.id);
        self.remove_one(node_id, actor).await
    }

    pub async fn bulk_assign(
        &self,
        node_ids: &[Uuid],
        new_parent_id: Uuid,
        actor: &Actor,
    ) -> HierarchyResult<BulkAssignOutcome> {
        authorize(actor)?;
        let selection = self.selection(node_ids)?;
        debug!(
            "BulkAssign {} nodes -> {} by {}",
            selection.len(),
            new_parent_id,
            actor.id
        );

        let mut outcome = BulkAssignOutcome {
            total: selection.len(),
            ..Default::default()
        };

        for node_id in selection {
            match self.assign_one(node_id, new_parent_id, actor).await {
                Ok(_) => outcome.record_success(),
                Err(e) => outcome.record_failure(node_id, &e),
            }
        }

        info!(
            "BulkAssign -> {} finished: {} ok, {} failed",
            new_parent_id, outcome.success_count, outcome.fail_count
        );
        Ok(outcome)
    }

    pub async fn bulk_remove_parent(
        &self,
        node_ids: &[Uuid],
        actor: &Actor,
    ) -> HierarchyResult<BulkRemoveOutcome> {
        authorize(actor)?;
        let selection = self.selection(node_ids)?;
        debug!(
            "BulkRemoveParent {} nodes by {}",
            selection.len(),
            actor.id
        );

        let mut outcome = BulkRemoveOutcome {
            total: selection.len(),
            ..Default::default()
        };

        for node_id in selection {
            match self.remove_one(node_id, actor).await {
                Ok(true) => outcome.updated_count += 1,
                Ok(false) => {}
                Err(HierarchyError::NodeNotFound { .. }) => outcome.not_found.push(node_id),
                Err(e) => {
                    warn!("BulkRemoveParent skipped {}: {}", node_id, e);
                    outcome.errors.push(BulkFailure::new(node_id, &e));
                }
            }
        }

        info!(
            "BulkRemoveParent finished: {} of {} updated",
            outcome.updated_count, outcome.total
        );
        Ok(outcome)
    }

    async fn assign_one(
        &self,
        node_id: Uuid,
        new_parent_id: Uuid,
        actor: &Actor,
    ) -> HierarchyResult<AssignOutcome> {
        let snapshot = self.store.find_all().await?;
        let index = NodeIndex::build(&snapshot.nodes);

        if let Err(e) = CycleValidator::new(&index).validate(node_id, new_parent_id) {
            warn!(
                "Refused to assign {} -> {} for {}: {}",
                node_id, new_parent_id, actor.id, e
            );
            return Err(e);
        }

        let node = index
            .get(node_id)
            .ok_or_else(|| HierarchyError::NodeNotFound {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            })?;
        let previous_parent_id = node.parent_id;
        let direct_reports = index.children(node_id).len();

        if previous_parent_id == Some(new_parent_id) {
            debug!("{} already reports to {}, nothing to write", node_id, new_parent_id);
        } else {
            self.store
                .set_parent_if_revision(node_id, new_parent_id, snapshot.revision)
                .await?;
            info!(
                "Reparented {}: {:?} -> {} by {} ({} direct reports moved)",
                node_id, previous_parent_id, new_parent_id, actor.id, direct_reports
            );
        }

        Ok(AssignOutcome::new(
            node_id,
            previous_parent_id,
            new_parent_id,
            direct_reports,
        ))
    }

    async fn remove_one(&self, node_id: Uuid, actor: &Actor) -> HierarchyResult<bool> {
        let changed = self.store.clear_parent(node_id).await?;

        if changed {
            info!("Removed manager of {} by {}", node_id, actor.id);
        } else {
            debug!("{} is already a root", node_id);
        }
        Ok(changed)
    }

    /// Distinct ids in first-seen order, bounded by the configured limit.
    fn selection(&self, node_ids: &[Uuid]) -> HierarchyResult<Vec<Uuid>> {
        let mut seen = HashSet::with_capacity(node_ids.len());
        let selection: Vec<Uuid> = node_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        if selection.len() > self.options.max_bulk_size {
            return Err(HierarchyError::BatchTooLarge {
                size: selection.len(),
                max: self.options.max_bulk_size,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(selection)
    }
}

fn authorize(actor: &Actor) -> HierarchyResult<()> {
    if !actor.may_mutate {
        warn!("Unauthorized hierarchy mutation attempt by {}", actor.id);
        return Err(HierarchyError::Unauthorized {
            actor_id: actor.id,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
