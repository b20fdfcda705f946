use crate::{Lead, error::Result as DbErrorResult};

use org_core::WorkItemCounts;

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

/// Keeps each IN-list well below SQLite's bound-parameter limit.
const COUNT_CHUNK_SIZE: usize = 500;

pub struct LeadRepository;

impl LeadRepository {
    pub async fn create<'e, E>(executor: E, lead: &Lead) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO leads (id, name, owner_id, assigned_to, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(lead.id.to_string())
        .bind(&lead.name)
        .bind(lead.owner_id.map(|id| id.to_string()))
        .bind(lead.assigned_to.map(|id| id.to_string()))
        .bind(Utc::now().timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Owned and assigned lead counts for every id in `user_ids`.
    ///
    /// Users with no leads are absent from the map. Issues two grouped
    /// queries per chunk of ids, never one per user.
    pub async fn counts_for(
        pool: &SqlitePool,
        user_ids: &[Uuid],
    ) -> DbErrorResult<HashMap<Uuid, WorkItemCounts>> {
        let mut counts: HashMap<Uuid, WorkItemCounts> = HashMap::new();

        for chunk in user_ids.chunks(COUNT_CHUNK_SIZE) {
            for (column, owned) in [("owner_id", true), ("assigned_to", false)] {
                let rows = Self::grouped_counts(pool, column, chunk).await?;
                for (user_id, count) in rows {
                    let Ok(user_id) = Uuid::parse_str(&user_id) else {
                        log::warn!("Skipping lead count for malformed user id {}", user_id);
                        continue;
                    };
                    let count = u64::try_from(count).unwrap_or_default();
                    let entry = counts.entry(user_id).or_default();
                    if owned {
                        entry.owned += count;
                    } else {
                        entry.assigned += count;
                    }
                }
            }
        }

        Ok(counts)
    }

    async fn grouped_counts(
        pool: &SqlitePool,
        column: &'static str,
        user_ids: &[Uuid],
    ) -> DbErrorResult<Vec<(String, i64)>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {column}, COUNT(*) FROM leads WHERE {column} IN ("));
        let mut separated = builder.separated(", ");
        for id in user_ids {
            separated.push_bind(id.to_string());
        }
        separated.push_unseparated(format!(") GROUP BY {column}"));

        let rows = builder
            .build_query_as::<(String, i64)>()
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }
}
