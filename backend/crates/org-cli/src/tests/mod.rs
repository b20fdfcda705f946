mod app;
mod cli;

use org_core::{
    EngineOptions, HierarchyService, InMemoryNodeStore, InMemoryWorkItemSource, Node, NodeRole,
};

use std::sync::Arc;

use uuid::Uuid;

pub(crate) type MemoryService = HierarchyService<InMemoryNodeStore, InMemoryWorkItemSource>;

/// admin (root) -> lead -> report; outsider stands alone
pub(crate) struct Org {
    pub admin: Node,
    pub lead: Node,
    pub report: Node,
    pub outsider: Node,
}

fn node(name: &str, role: NodeRole, parent_id: Option<Uuid>) -> Node {
    let mut node = Node::new(
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
        role,
    );
    node.parent_id = parent_id;
    node
}

pub(crate) fn org_service() -> (Org, MemoryService) {
    let admin = node("Admin", NodeRole::Admin, None);
    let lead = node("Lead", NodeRole::Manager, Some(admin.id));
    let report = node("Report", NodeRole::Agent, Some(lead.id));
    let outsider = node("Outsider", NodeRole::User, None);

    let store = InMemoryNodeStore::with_nodes([
        admin.clone(),
        lead.clone(),
        report.clone(),
        outsider.clone(),
    ]);
    let service = HierarchyService::new(
        Arc::new(store),
        Arc::new(InMemoryWorkItemSource::new()),
        EngineOptions::default(),
    );

    (
        Org {
            admin,
            lead,
            report,
            outsider,
        },
        service,
    )
}
