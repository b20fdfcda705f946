use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid node role: {value} {location}")]
    InvalidNodeRole {
        value: String,
        location: ErrorLocation,
    },
}

/// Failures surfaced by the hierarchy engine.
///
/// `SelfReference`, `CycleDetected` and `ParentNotFound` are ordinary
/// refusals. `UnexpectedCycle` means stored data already violates the
/// acyclic invariant and is reported apart from them.
#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("Node {node_id} cannot be its own manager {location}")]
    SelfReference {
        node_id: Uuid,
        location: ErrorLocation,
    },

    #[error(
        "Cannot assign {candidate_parent_id} as manager of {node_id}: \
         candidate parent is a descendant of the target {location}"
    )]
    CycleDetected {
        node_id: Uuid,
        candidate_parent_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Parent node not found: {parent_id} {location}")]
    ParentNotFound {
        parent_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Node not found: {node_id} {location}")]
    NodeNotFound {
        node_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Hierarchy data is corrupt: parent chain loops through node {node_id} {location}")]
    UnexpectedCycle {
        node_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Node store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Actor {actor_id} may not change the hierarchy {location}")]
    Unauthorized {
        actor_id: Uuid,
        location: ErrorLocation,
    },

    #[error(
        "Hierarchy changed concurrently (expected revision {expected}, found {actual}) {location}"
    )]
    ConcurrentModification {
        expected: u64,
        actual: u64,
        location: ErrorLocation,
    },

    #[error("Bulk selection of {size} nodes exceeds the limit of {max} {location}")]
    BatchTooLarge {
        size: usize,
        max: usize,
        location: ErrorLocation,
    },
}

impl HierarchyError {
    /// Stable machine-readable code for callers and UIs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SelfReference { .. } => "SELF_REFERENCE",
            Self::CycleDetected { .. } => "CYCLE_DETECTED",
            Self::ParentNotFound { .. } => "PARENT_NOT_FOUND",
            Self::NodeNotFound { .. } => "NODE_NOT_FOUND",
            Self::UnexpectedCycle { .. } => "UNEXPECTED_CYCLE",
            Self::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::ConcurrentModification { .. } => "CONCURRENT_MODIFICATION",
            Self::BatchTooLarge { .. } => "BATCH_TOO_LARGE",
        }
    }

    /// True for the expected refusals of a reparenting request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::SelfReference { .. } | Self::CycleDetected { .. } | Self::ParentNotFound { .. }
        )
    }
}

/// Errors raised at the node store and work-item source boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Revision conflict: expected {expected}, found {actual} {location}")]
    Conflict {
        expected: u64,
        actual: u64,
        location: ErrorLocation,
    },

    #[error("Node {node_id} does not exist in the store {location}")]
    NotFound {
        node_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Corrupt record: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Self::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for HierarchyError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            StoreError::Conflict {
                expected, actual, ..
            } => Self::ConcurrentModification {
                expected,
                actual,
                location,
            },
            StoreError::NotFound { node_id, .. } => Self::NodeNotFound { node_id, location },
            other => Self::StoreUnavailable {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
pub type HierarchyResult<T> = StdResult<T, HierarchyError>;
pub type StoreResult<T> = StdResult<T, StoreError>;
