use serde::Serialize;
use uuid::Uuid;

/// Result of a successful single reparenting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignOutcome {
    pub node_id: Uuid,
    pub previous_parent_id: Option<Uuid>,
    pub new_parent_id: Uuid,
    /// The node had direct reports, which moved with it.
    pub preserved_subtree: bool,
    pub direct_reports_moved: usize,
    pub message: String,
}

impl AssignOutcome {
    pub fn new(
        node_id: Uuid,
        previous_parent_id: Option<Uuid>,
        new_parent_id: Uuid,
        direct_reports: usize,
    ) -> Self {
        let preserved_subtree = direct_reports > 0;
        let message = if preserved_subtree {
            format!(
                "Manager assigned; {} direct report{} moved with their manager",
                direct_reports,
                if direct_reports == 1 { "" } else { "s" }
            )
        } else {
            String::from("Manager assigned successfully")
        };

        Self {
            node_id,
            previous_parent_id,
            new_parent_id,
            preserved_subtree,
            direct_reports_moved: if preserved_subtree { direct_reports } else { 0 },
            message,
        }
    }
}
