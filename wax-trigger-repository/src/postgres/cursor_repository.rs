//! PostgreSQL implementation of the cursor store.
//!
//! Stores cursor state in a `trigger_cursor` table to enable trigger
//! resumption after restarts. The cursor is persisted as JSON text, one
//! row per trigger id, written with upsert operations.

use crate::CursorRepository;
use crate::errors::CursorRepositoryError;
use async_trait::async_trait;
use sqlx::Row;
use wax_trigger_shared::types::Cursor;

/// PostgreSQL-backed cursor store.
///
/// Expects the `trigger_cursor` table from `migrations/` to exist.
pub struct PostgresCursorRepository {
    pool: sqlx::PgPool,
}

impl PostgresCursorRepository {
    /// Creates a new PostgreSQL cursor store instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with the required
    ///   schema (trigger_cursor table)
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, CursorRepositoryError> {
        Ok(Self { pool })
    }
}

#[async_trait]
impl CursorRepository for PostgresCursorRepository {
    async fn get_cursor(&self, id: &str) -> Result<Option<Cursor>, CursorRepositoryError> {
        let row = sqlx::query("SELECT cursor FROM trigger_cursor WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let raw: String = row.try_get("cursor")?;
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => Ok(None),
        }
    }

    async fn save_cursor(&self, id: &str, cursor: &Cursor) -> Result<(), CursorRepositoryError> {
        let raw = serde_json::to_string(cursor)?;
        sqlx::query(
            "INSERT INTO trigger_cursor (id, cursor) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET cursor = $2",
        )
        .bind(id)
        .bind(raw)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
