use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubtreeStats {
    /// Every node below the root, the root excluded.
    pub total_descendants: usize,
    pub direct_reports: usize,
    /// Longest root-to-leaf path in edges; a lone root is 0.
    pub max_depth: usize,
    pub owned_work_items: u64,
    pub assigned_work_items: u64,
}
