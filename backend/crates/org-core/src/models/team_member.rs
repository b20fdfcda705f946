use crate::models::node::Node;

use serde::Serialize;

/// Flat listing row of a subtree, `depth` relative to the subtree root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub node: Node,
    pub depth: usize,
}
