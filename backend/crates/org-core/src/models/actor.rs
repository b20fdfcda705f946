use uuid::Uuid;

/// The caller of a mutation together with the authorization decision
/// made for it upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub may_mutate: bool,
}

impl Actor {
    pub fn authorized(id: Uuid) -> Self {
        Self {
            id,
            may_mutate: true,
        }
    }

    pub fn unauthorized(id: Uuid) -> Self {
        Self {
            id,
            may_mutate: false,
        }
    }
}
