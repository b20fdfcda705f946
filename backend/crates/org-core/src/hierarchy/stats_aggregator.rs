use crate::hierarchy::{node_index::NodeIndex, tree_builder::TreeBuilder};
use crate::{HierarchyResult, SubtreeStats, WorkItemCounts, WorkItemSource};

use log::debug;
use uuid::Uuid;

/// Subtree metrics, recomputed on every call.
pub struct StatsAggregator<'a, W: WorkItemSource + ?Sized> {
    index: &'a NodeIndex<'a>,
    work_items: &'a W,
}

impl<'a, W: WorkItemSource + ?Sized> StatsAggregator<'a, W> {
    pub fn new(index: &'a NodeIndex<'a>, work_items: &'a W) -> Self {
        Self { index, work_items }
    }

    /// Structure comes from the index; work-item totals come from one batch
    /// lookup covering the root and all of its descendants.
    pub async fn stats(&self, root_id: Uuid) -> HierarchyResult<SubtreeStats> {
        let tree = TreeBuilder::new(self.index).subtree(root_id)?;

        let mut member_ids = Vec::with_capacity(tree.size());
        member_ids.push(root_id);
        member_ids.extend(tree.descendant_ids());

        let counts = self.work_items.counts_for(&member_ids).await?;
        let mut totals = WorkItemCounts::default();
        for id in &member_ids {
            if let Some(c) = counts.get(id) {
                totals += *c;
            }
        }

        let stats = SubtreeStats {
            total_descendants: member_ids.len() - 1,
            direct_reports: tree.direct_report_count(),
            max_depth: tree.max_depth(),
            owned_work_items: totals.owned,
            assigned_work_items: totals.assigned,
        };
        debug!("Stats for {}: {:?}", root_id, stats);

        Ok(stats)
    }
}
