//! Pure hierarchy algorithms over a flat set of nodes.
//!
//! Everything here works on a [`NodeIndex`] built once per request from a
//! store snapshot: a parent-to-children index assembled in one O(N) pass.
//! Walks guard against cycles in the data and fail with
//! `HierarchyError::UnexpectedCycle` instead of looping.

pub mod chain_resolver;
pub mod cycle_validator;
pub mod node_index;
pub mod stats_aggregator;
pub mod tree_builder;

use crate::HierarchyError;

use std::panic::Location;

use error_location::ErrorLocation;
use log::error;
use uuid::Uuid;

/// Builds the integrity-fault error for a walk that revisited `node_id`.
#[track_caller]
pub(crate) fn unexpected_cycle(node_id: Uuid) -> HierarchyError {
    error!(
        "Structural integrity fault: parent chain revisits node {}. \
         A write bypassed cycle validation.",
        node_id
    );
    HierarchyError::UnexpectedCycle {
        node_id,
        location: ErrorLocation::from(Location::caller()),
    }
}
