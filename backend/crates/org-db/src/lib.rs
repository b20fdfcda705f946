pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use connection::sqlite_pool::{PoolSettings, connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use models::lead::Lead;
pub use repositories::lead_repository::LeadRepository;
pub use repositories::revision_repository::RevisionRepository;
pub use repositories::user_repository::UserRepository;
pub use store::lead_work_item_source::LeadWorkItemSource;
pub use store::sqlite_node_store::SqliteNodeStore;
