pub const DEFAULT_MAX_BULK_SIZE: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Largest selection a bulk call accepts.
    pub max_bulk_size: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_bulk_size: DEFAULT_MAX_BULK_SIZE,
        }
    }
}
