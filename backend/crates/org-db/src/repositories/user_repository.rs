use crate::{DbError, error::Result as DbErrorResult};

use org_core::{Node, NodeRole};

use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

/// Raw `users` row; ids and role are stored as text.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    display_name: String,
    email: String,
    phone: Option<String>,
    role: String,
    manager_id: Option<String>,
}

impl TryFrom<UserRow> for Node {
    type Error = DbError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| DbError::invalid_row("users", format!("bad id {}: {}", row.id, e)))?;
        let role = NodeRole::from_str(&row.role)
            .map_err(|e| DbError::invalid_row("users", format!("user {}: {}", id, e)))?;
        let parent_id = row
            .manager_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()
            .map_err(|e| {
                DbError::invalid_row("users", format!("user {} has bad manager_id: {}", id, e))
            })?;

        Ok(Node {
            id,
            display_name: row.display_name,
            email: row.email,
            phone: row.phone,
            role,
            parent_id,
        })
    }
}

const SELECT_USER: &str = r#"
    SELECT id, display_name, email, phone, role, manager_id
    FROM users
"#;

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(executor: E, node: &Node) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, display_name, email, phone, role, manager_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(node.id.to_string())
        .bind(&node.display_name)
        .bind(&node.email)
        .bind(&node.phone)
        .bind(node.role.as_str())
        .bind(node.parent_id.map(|id| id.to_string()))
        .bind(now)
        .bind(now)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Node>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_USER} WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(Node::try_from).transpose()
    }

    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Node>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_USER} ORDER BY display_name, id");
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Node::try_from).collect()
    }

    /// Point `id` at `manager_id`. Returns the number of rows touched (0 or 1).
    pub async fn update_manager<'e, E>(
        executor: E,
        id: Uuid,
        manager_id: Uuid,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET manager_id = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(manager_id.to_string())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Clear the manager of `id`. Touches nothing when it already has none.
    pub async fn clear_manager<'e, E>(executor: E, id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET manager_id = NULL, updated_at = ?
                WHERE id = ? AND manager_id IS NOT NULL
            "#,
        )
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
