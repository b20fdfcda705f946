pub mod actor;
pub mod assign_outcome;
pub mod assignment_check;
pub mod bulk_assign_outcome;
pub mod bulk_remove_outcome;
pub mod chain_entry;
pub mod node;
pub mod node_role;
pub mod subtree_stats;
pub mod team_member;
pub mod tree_node;
pub mod work_item_counts;
