use crate::{ConfigError, ConfigErrorResult};

use org_core::DEFAULT_MAX_BULK_SIZE;

use serde::Deserialize;

// Hierarchy constraints
pub const MIN_MAX_BULK_SIZE: usize = 1;
pub const MAX_MAX_BULK_SIZE: usize = 10_000;

/// Limits applied by the reassignment engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Largest selection accepted by one bulk assign or bulk remove
    pub max_bulk_size: usize,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            max_bulk_size: DEFAULT_MAX_BULK_SIZE,
        }
    }
}

impl HierarchyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_bulk_size < MIN_MAX_BULK_SIZE || self.max_bulk_size > MAX_MAX_BULK_SIZE {
            return Err(ConfigError::hierarchy(format!(
                "hierarchy.max_bulk_size must be {}-{}, got {}",
                MIN_MAX_BULK_SIZE, MAX_MAX_BULK_SIZE, self.max_bulk_size
            )));
        }

        Ok(())
    }
}
