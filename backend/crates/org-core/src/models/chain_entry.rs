use crate::models::node::Node;

use serde::Serialize;

/// One ancestor in a manager chain. `level` 1 is the immediate manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainEntry {
    pub node: Node,
    pub level: usize,
}
