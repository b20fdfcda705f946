use crate::HierarchyError;

use serde::Serialize;

/// Dry-run answer to "may this node report to that one".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentCheck {
    pub allowed: bool,
    pub code: Option<String>,
    pub reason: Option<String>,
}

impl AssignmentCheck {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            code: None,
            reason: None,
        }
    }

    pub fn refused(error: &HierarchyError) -> Self {
        Self {
            allowed: false,
            code: Some(error.error_code().to_string()),
            reason: Some(error.to_string()),
        }
    }
}
