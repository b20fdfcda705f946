use crate::{DbError, RevisionRepository, UserRepository};

use org_core::{ForestSnapshot, Node, NodeStore, StoreError, StoreResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// `NodeStore` over the `users` table.
///
/// Parent writes and the revision bump share one transaction, so a write
/// either lands together with its revision or not at all.
#[derive(Clone)]
pub struct SqliteNodeStore {
    pool: SqlitePool,
}

impl SqliteNodeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NodeStore for SqliteNodeStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Node>> {
        Ok(UserRepository::find_by_id(&self.pool, id).await?)
    }

    async fn find_all(&self) -> StoreResult<ForestSnapshot> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let revision = RevisionRepository::current(&mut *tx).await?;
        let nodes = UserRepository::find_all(&mut *tx).await?;

        tx.commit().await.map_err(DbError::from)?;

        Ok(ForestSnapshot { revision, nodes })
    }

    async fn set_parent_if_revision(
        &self,
        node_id: Uuid,
        parent_id: Uuid,
        expected_revision: u64,
    ) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        if !RevisionRepository::advance_if(&mut *tx, expected_revision).await? {
            let actual = RevisionRepository::current(&mut *tx).await?;
            return Err(StoreError::Conflict {
                expected: expected_revision,
                actual,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if UserRepository::update_manager(&mut *tx, node_id, parent_id).await? == 0 {
            return Err(StoreError::NotFound {
                node_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        tx.commit().await.map_err(DbError::from)?;

        log::debug!(
            "Stored manager {} for user {} at revision {}",
            parent_id,
            node_id,
            expected_revision + 1
        );

        Ok(expected_revision + 1)
    }

    async fn clear_parent(&self, node_id: Uuid) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        if UserRepository::clear_manager(&mut *tx, node_id).await? == 0 {
            let exists = UserRepository::find_by_id(&mut *tx, node_id)
                .await?
                .is_some();
            if !exists {
                return Err(StoreError::NotFound {
                    node_id,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            return Ok(false);
        }

        RevisionRepository::advance(&mut *tx).await?;
        tx.commit().await.map_err(DbError::from)?;

        log::debug!("Cleared manager of user {}", node_id);

        Ok(true)
    }
}
