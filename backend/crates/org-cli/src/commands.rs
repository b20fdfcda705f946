use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print every reporting tree
    Forest,

    /// Print the tree rooted at a user
    Subtree {
        /// Root user ID (UUID)
        id: Uuid,
    },

    /// List a user and everyone below them with their depth
    Team {
        /// Root user ID (UUID)
        id: Uuid,
    },

    /// Print a user's managers, nearest first
    Chain {
        /// User ID (UUID)
        id: Uuid,
    },

    /// Team size, depth and work-item totals under a user
    Stats {
        /// Root user ID (UUID)
        id: Uuid,
    },

    /// Check whether an assignment would be accepted, without changing anything
    Validate {
        /// User to move (UUID)
        node_id: Uuid,

        /// Proposed manager (UUID)
        manager_id: Uuid,
    },

    /// Set a user's manager; their reports move with them
    Assign {
        /// User to move (UUID)
        node_id: Uuid,

        /// New manager (UUID)
        manager_id: Uuid,
    },

    /// Move a manager and their whole reporting line under a new manager
    MoveTree {
        /// Manager to move (UUID)
        manager_id: Uuid,

        /// New manager (UUID)
        new_manager_id: Uuid,
    },

    /// Make a user a root; their reports stay with them
    RemoveManager {
        /// User ID (UUID)
        node_id: Uuid,
    },

    /// Set the same manager for many users
    BulkAssign {
        /// New manager (UUID)
        #[arg(long)]
        manager_id: Uuid,

        /// Users to move (UUIDs)
        #[arg(required = true, num_args = 1..)]
        node_ids: Vec<Uuid>,
    },

    /// Remove the manager of many users
    BulkRemove {
        /// Users to detach (UUIDs)
        #[arg(required = true, num_args = 1..)]
        node_ids: Vec<Uuid>,
    },
}
