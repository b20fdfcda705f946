//! Materializes nested views from the flat node index.
//!
//! One assembly core serves both entry points: a single subtree rooted at
//! a given node, and the whole forest. Assembly is iterative so arbitrarily
//! deep reporting lines cannot exhaust the call stack.

use crate::hierarchy::{node_index::NodeIndex, unexpected_cycle};
use crate::{HierarchyError, HierarchyResult, Node, TreeNode};

use std::collections::{HashSet, VecDeque};
use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

pub struct TreeBuilder<'a> {
    index: &'a NodeIndex<'a>,
}

struct Frame<'a> {
    node: &'a Node,
    depth: usize,
    next_child: usize,
    children: Vec<TreeNode>,
}

impl<'a> Frame<'a> {
    fn new(node: &'a Node, depth: usize) -> Self {
        Self {
            node,
            depth,
            next_child: 0,
            children: Vec::new(),
        }
    }

    fn into_tree(self) -> TreeNode {
        TreeNode {
            node: self.node.clone(),
            depth: self.depth,
            children: self.children,
        }
    }
}

impl<'a> TreeBuilder<'a> {
    pub fn new(index: &'a NodeIndex<'a>) -> Self {
        Self { index }
    }

    /// `root_id` and everything that reports to it, directly or not.
    pub fn subtree(&self, root_id: Uuid) -> HierarchyResult<TreeNode> {
        let root = self
            .index
            .get(root_id)
            .ok_or_else(|| HierarchyError::NodeNotFound {
                node_id: root_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut visited = HashSet::new();
        self.assemble(root, &mut visited)
    }

    /// Every tree of the forest, roots in display order.
    ///
    /// Each node appears exactly once. Nodes that no root reaches can only
    /// sit on a parent cycle, which is reported rather than dropped.
    pub fn forest(&self) -> HierarchyResult<Vec<TreeNode>> {
        let mut visited = HashSet::with_capacity(self.index.len());
        let mut trees = Vec::with_capacity(self.index.roots().len());

        for &root in self.index.roots() {
            trees.push(self.assemble(root, &mut visited)?);
        }

        if visited.len() != self.index.len()
            && let Some(stranded) = self.index.nodes().find(|n| !visited.contains(&n.id))
        {
            return Err(unexpected_cycle(stranded.id));
        }

        Ok(trees)
    }

    /// Ids of everything below `root_id`, breadth-first, without building
    /// the nested view.
    pub fn descendant_ids(&self, root_id: Uuid) -> HierarchyResult<HashSet<Uuid>> {
        if !self.index.contains(root_id) {
            return Err(HierarchyError::NodeNotFound {
                node_id: root_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut descendants = HashSet::new();
        let mut queue: VecDeque<&Node> = self.index.children(root_id).iter().copied().collect();

        while let Some(node) = queue.pop_front() {
            if node.id == root_id || !descendants.insert(node.id) {
                return Err(unexpected_cycle(node.id));
            }
            queue.extend(self.index.children(node.id).iter().copied());
        }

        Ok(descendants)
    }

    fn assemble(&self, root: &'a Node, visited: &mut HashSet<Uuid>) -> HierarchyResult<TreeNode> {
        mark_visited(root, visited)?;
        let mut stack = vec![Frame::new(root, 0)];

        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = self.index.children(frame.node.id).get(frame.next_child) {
                frame.next_child += 1;
                let depth = frame.depth + 1;
                mark_visited(child, visited)?;
                stack.push(Frame::new(child, depth));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let tree = done.into_tree();
            match stack.last_mut() {
                Some(parent) => parent.children.push(tree),
                None => return Ok(tree),
            }
        }

        unreachable!("the root frame is returned before the stack empties")
    }
}

fn mark_visited(node: &Node, visited: &mut HashSet<Uuid>) -> HierarchyResult<()> {
    if !visited.insert(node.id) {
        return Err(unexpected_cycle(node.id));
    }
    Ok(())
}
