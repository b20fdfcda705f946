use crate::Node;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::warn;
use uuid::Uuid;

/// Lookup tables over one snapshot of the forest.
///
/// Children and roots are kept in a stable order (display name, then id)
/// so every view built from the same input is identical.
pub struct NodeIndex<'a> {
    nodes: Vec<&'a Node>,
    by_id: HashMap<Uuid, &'a Node>,
    children_of: HashMap<Uuid, Vec<&'a Node>>,
    roots: Vec<&'a Node>,
}

impl<'a> NodeIndex<'a> {
    pub fn build(nodes: &'a [Node]) -> Self {
        let mut by_id: HashMap<Uuid, &'a Node> = HashMap::with_capacity(nodes.len());
        let mut unique = Vec::with_capacity(nodes.len());

        for node in nodes {
            match by_id.entry(node.id) {
                Entry::Occupied(_) => {
                    warn!("Duplicate node {} in snapshot, keeping first copy", node.id);
                }
                Entry::Vacant(slot) => {
                    slot.insert(node);
                    unique.push(node);
                }
            }
        }

        let mut children_of: HashMap<Uuid, Vec<&'a Node>> = HashMap::new();
        let mut roots = Vec::new();

        for &node in &unique {
            match node.parent_id {
                Some(pid) if by_id.contains_key(&pid) => {
                    children_of.entry(pid).or_default().push(node);
                }
                Some(pid) => {
                    warn!(
                        "Node {} references missing parent {}, treating it as a root",
                        node.id, pid
                    );
                    roots.push(node);
                }
                None => roots.push(node),
            }
        }

        roots.sort_by(|a, b| display_order(a, b));
        for children in children_of.values_mut() {
            children.sort_by(|a, b| display_order(a, b));
        }

        Self {
            nodes: unique,
            by_id,
            children_of,
            roots,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&'a Node> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Direct reports of `id`, in display order.
    pub fn children(&self, id: Uuid) -> &[&'a Node] {
        self.children_of.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Unmanaged nodes plus nodes whose manager is not in the snapshot.
    pub fn roots(&self) -> &[&'a Node] {
        &self.roots
    }

    pub fn nodes(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.nodes.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

fn display_order(a: &Node, b: &Node) -> Ordering {
    a.display_name
        .cmp(&b.display_name)
        .then_with(|| a.id.cmp(&b.id))
}
