use crate::{DbError, error::Result as DbErrorResult};

/// The store-wide hierarchy revision. Every successful write advances it,
/// which lets writers detect that the snapshot they validated is stale.
pub struct RevisionRepository;

impl RevisionRepository {
    pub async fn current<'e, E>(executor: E) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let revision: Option<i64> =
            sqlx::query_scalar("SELECT revision FROM hierarchy_revision WHERE id = 1")
                .fetch_optional(executor)
                .await?;

        let revision = revision
            .ok_or_else(|| DbError::invalid_row("hierarchy_revision", "revision row missing"))?;

        u64::try_from(revision)
            .map_err(|_| DbError::invalid_row("hierarchy_revision", "negative revision"))
    }

    /// Advance only when the stored revision is still `expected`.
    pub async fn advance_if<'e, E>(executor: E, expected: u64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let expected = i64::try_from(expected)
            .map_err(|_| DbError::invalid_row("hierarchy_revision", "revision out of range"))?;

        let result = sqlx::query(
            "UPDATE hierarchy_revision SET revision = revision + 1 WHERE id = 1 AND revision = ?",
        )
        .bind(expected)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn advance<'e, E>(executor: E) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE hierarchy_revision SET revision = revision + 1 WHERE id = 1")
            .execute(executor)
            .await?;

        Ok(())
    }
}
