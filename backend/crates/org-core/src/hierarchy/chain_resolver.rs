use crate::hierarchy::{node_index::NodeIndex, unexpected_cycle};
use crate::{ChainEntry, HierarchyError, HierarchyResult};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;
use uuid::Uuid;

/// Resolves manager chains, nearest manager first, to any depth.
pub struct ChainResolver<'a> {
    index: &'a NodeIndex<'a>,
}

impl<'a> ChainResolver<'a> {
    pub fn new(index: &'a NodeIndex<'a>) -> Self {
        Self { index }
    }

    /// Ancestors of `node_id` from its immediate manager up to its root.
    /// Empty for a root. A manager missing from the snapshot ends the chain,
    /// matching how the forest view treats orphans.
    pub fn chain(&self, node_id: Uuid) -> HierarchyResult<Vec<ChainEntry>> {
        let node = self
            .index
            .get(node_id)
            .ok_or_else(|| HierarchyError::NodeNotFound {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut chain = Vec::new();
        let mut visited = HashSet::from([node_id]);
        let mut next = node.parent_id;

        while let Some(pid) = next {
            let Some(parent) = self.index.get(pid) else {
                warn!("Chain of {} stops at missing manager {}", node_id, pid);
                break;
            };
            if !visited.insert(pid) {
                return Err(unexpected_cycle(pid));
            }
            chain.push(ChainEntry {
                node: parent.clone(),
                level: chain.len() + 1,
            });
            next = parent.parent_id;
        }

        Ok(chain)
    }
}
