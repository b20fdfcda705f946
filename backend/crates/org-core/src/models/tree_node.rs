use crate::models::{node::Node, team_member::TeamMember};

use serde::Serialize;
use uuid::Uuid;

/// A node with its direct reports attached, recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub node: Node,
    /// Distance from the root of the tree this node was built in.
    pub depth: usize,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(node: Node, depth: usize) -> Self {
        Self {
            node,
            depth,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.node.id
    }

    pub fn direct_report_count(&self) -> usize {
        self.children.len()
    }

    /// Number of nodes in this tree, itself included.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Longest path from this node down to a leaf, in edges.
    pub fn max_depth(&self) -> usize {
        self.iter()
            .map(|tree| tree.depth - self.depth)
            .max()
            .unwrap_or(0)
    }

    /// Ids of every node below this one, pre-order.
    pub fn descendant_ids(&self) -> Vec<Uuid> {
        self.iter().skip(1).map(TreeNode::id).collect()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.iter().any(|tree| tree.id() == id)
    }

    /// Depth-first pre-order listing, depths relative to this node.
    pub fn flatten(&self) -> Vec<TeamMember> {
        self.iter()
            .map(|tree| TeamMember {
                node: tree.node.clone(),
                depth: tree.depth - self.depth,
            })
            .collect()
    }

    /// Pre-order iterator over this tree.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        self.stack.extend(tree.children.iter().rev());
        Some(tree)
    }
}
