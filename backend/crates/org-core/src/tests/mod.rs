mod chain_resolver;
mod models;
mod properties;

use crate::{
    EngineOptions, HierarchyService, InMemoryNodeStore, InMemoryWorkItemSource, Node, NodeRole,
};

use std::sync::Arc;

use uuid::Uuid;

/// Create a minimal Node with only hierarchy-relevant fields.
pub(crate) fn test_node(name: &str, parent_id: Option<Uuid>) -> Node {
    Node {
        id: Uuid::new_v4(),
        display_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        role: NodeRole::Agent,
        parent_id,
    }
}

/// Root -> M -> {A, B}, plus an unrelated root Root2.
pub(crate) struct SampleOrg {
    pub root: Node,
    pub m: Node,
    pub a: Node,
    pub b: Node,
    pub root2: Node,
}

impl SampleOrg {
    pub(crate) fn new() -> Self {
        let root = test_node("Root", None);
        let m = test_node("M", Some(root.id));
        let a = test_node("A", Some(m.id));
        let b = test_node("B", Some(m.id));
        let root2 = test_node("Root2", None);
        Self {
            root,
            m,
            a,
            b,
            root2,
        }
    }

    pub(crate) fn nodes(&self) -> Vec<Node> {
        vec![
            self.root.clone(),
            self.m.clone(),
            self.a.clone(),
            self.b.clone(),
            self.root2.clone(),
        ]
    }
}

pub(crate) type MemoryService = HierarchyService<InMemoryNodeStore, InMemoryWorkItemSource>;

/// Service over in-memory collaborators, returning them for inspection.
pub(crate) fn memory_service(
    nodes: Vec<Node>,
) -> (
    MemoryService,
    Arc<InMemoryNodeStore>,
    Arc<InMemoryWorkItemSource>,
) {
    let store = Arc::new(InMemoryNodeStore::with_nodes(nodes));
    let work_items = Arc::new(InMemoryWorkItemSource::new());
    let service = HierarchyService::new(
        Arc::clone(&store),
        Arc::clone(&work_items),
        EngineOptions::default(),
    );
    (service, store, work_items)
}

/// Helper: ids of a chain, nearest manager first.
pub(crate) fn chain_ids(chain: &[crate::ChainEntry]) -> Vec<Uuid> {
    chain.iter().map(|entry| entry.node.id).collect()
}
