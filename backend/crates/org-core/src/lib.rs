pub mod engine;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::engine_options::{DEFAULT_MAX_BULK_SIZE, EngineOptions};
pub use engine::reassignment_engine::ReassignmentEngine;
pub use error::{CoreError, HierarchyError, HierarchyResult, Result, StoreError, StoreResult};
pub use hierarchy::chain_resolver::ChainResolver;
pub use hierarchy::cycle_validator::CycleValidator;
pub use hierarchy::node_index::NodeIndex;
pub use hierarchy::stats_aggregator::StatsAggregator;
pub use hierarchy::tree_builder::TreeBuilder;
pub use models::actor::Actor;
pub use models::assign_outcome::AssignOutcome;
pub use models::assignment_check::AssignmentCheck;
pub use models::bulk_assign_outcome::{BulkAssignOutcome, BulkFailure};
pub use models::bulk_remove_outcome::BulkRemoveOutcome;
pub use models::chain_entry::ChainEntry;
pub use models::node::Node;
pub use models::node_role::NodeRole;
pub use models::subtree_stats::SubtreeStats;
pub use models::team_member::TeamMember;
pub use models::tree_node::TreeNode;
pub use models::work_item_counts::WorkItemCounts;
pub use service::HierarchyService;
pub use store::memory::{InMemoryNodeStore, InMemoryWorkItemSource};
pub use store::node_store::{ForestSnapshot, NodeStore};
pub use store::work_item_source::WorkItemSource;
