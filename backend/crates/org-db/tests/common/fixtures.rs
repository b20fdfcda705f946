#![allow(dead_code)]

use org_core::{Node, NodeRole};

use uuid::Uuid;

/// Creates a test user with a unique email
pub fn create_test_node(name: &str, parent_id: Option<Uuid>) -> Node {
    let id = Uuid::new_v4();
    Node {
        id,
        display_name: name.to_string(),
        email: format!("{}-{}@example.com", name.to_lowercase(), id),
        phone: None,
        role: NodeRole::User,
        parent_id,
    }
}

/// root -> m -> {a, b}; root2 stands alone
pub struct SampleOrg {
    pub root: Node,
    pub m: Node,
    pub a: Node,
    pub b: Node,
    pub root2: Node,
}

impl SampleOrg {
    pub fn new() -> Self {
        let root = create_test_node("Root", None);
        let m = create_test_node("Manager", Some(root.id));
        let a = create_test_node("Alice", Some(m.id));
        let b = create_test_node("Bob", Some(m.id));
        let root2 = create_test_node("Root2", None);
        Self {
            root,
            m,
            a,
            b,
            root2,
        }
    }

    pub fn nodes(&self) -> Vec<Node> {
        vec![
            self.root.clone(),
            self.m.clone(),
            self.a.clone(),
            self.b.clone(),
            self.root2.clone(),
        ]
    }
}
