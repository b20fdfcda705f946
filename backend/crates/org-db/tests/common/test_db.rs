use org_core::Node;
use org_db::{UserRepository, connect_in_memory};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts every node in order; parents must come before their reports
pub async fn insert_nodes(pool: &SqlitePool, nodes: &[Node]) {
    for node in nodes {
        UserRepository::create(pool, node)
            .await
            .expect("Failed to insert test user");
    }
}
