use crate::models::node_role::NodeRole;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user position in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: Uuid,

    // Descriptive
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: NodeRole,

    // Hierarchy
    pub parent_id: Option<Uuid>,
}

impl Node {
    pub fn new(display_name: String, email: String, role: NodeRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            email,
            phone: None,
            role,
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
