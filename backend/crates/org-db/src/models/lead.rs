use uuid::Uuid;

/// A sales lead. Only its attribution matters here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
}

impl Lead {
    pub fn new(name: String, owner_id: Option<Uuid>, assigned_to: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            owner_id,
            assigned_to,
        }
    }
}
