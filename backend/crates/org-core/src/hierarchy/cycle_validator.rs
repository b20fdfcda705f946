use crate::hierarchy::{node_index::NodeIndex, tree_builder::TreeBuilder};
use crate::{HierarchyError, HierarchyResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Decides whether `node_id` may report to `candidate_parent_id`.
///
/// The candidate must not be the node itself or anything currently below
/// it; the check computes the node's full descendant set and tests
/// membership. Read-only.
pub struct CycleValidator<'a> {
    index: &'a NodeIndex<'a>,
}

impl<'a> CycleValidator<'a> {
    pub fn new(index: &'a NodeIndex<'a>) -> Self {
        Self { index }
    }

    pub fn validate(&self, node_id: Uuid, candidate_parent_id: Uuid) -> HierarchyResult<()> {
        if node_id == candidate_parent_id {
            return Err(HierarchyError::SelfReference {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.index.contains(node_id) {
            return Err(HierarchyError::NodeNotFound {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.index.contains(candidate_parent_id) {
            return Err(HierarchyError::ParentNotFound {
                parent_id: candidate_parent_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let descendants = TreeBuilder::new(self.index).descendant_ids(node_id)?;
        if descendants.contains(&candidate_parent_id) {
            return Err(HierarchyError::CycleDetected {
                node_id,
                candidate_parent_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
