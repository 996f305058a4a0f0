use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Festival, STATUS_ACTIVE, STATUS_INACTIVE};

/// Repository for Festival database operations
pub struct FestivalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FestivalRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all festivals, newest first
    pub async fn list(&self) -> Result<Vec<Festival>> {
        let festivals = sqlx::query_as::<_, Festival>(
            r#"
            SELECT festival_id, name, status, created_at
            FROM festivals
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(festivals)
    }

    /// Get a festival by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Festival> {
        let festival = sqlx::query_as::<_, Festival>(
            r#"
            SELECT festival_id, name, status, created_at
            FROM festivals
            WHERE festival_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(festival)
    }

    /// Get the single active festival, if any
    pub async fn find_active(&self) -> Result<Option<Festival>> {
        let festival = sqlx::query_as::<_, Festival>(
            r#"
            SELECT festival_id, name, status, created_at
            FROM festivals
            WHERE status = $1
            LIMIT 1
            "#,
        )
        .bind(STATUS_ACTIVE)
        .fetch_optional(self.pool)
        .await?;

        Ok(festival)
    }

    /// Create a new festival in the inactive state
    pub async fn create(&self, name: &str) -> Result<Festival> {
        let festival = sqlx::query_as::<_, Festival>(
            r#"
            INSERT INTO festivals (name, status)
            VALUES ($1, $2)
            RETURNING festival_id, name, status, created_at
            "#,
        )
        .bind(name)
        .bind(STATUS_INACTIVE)
        .fetch_one(self.pool)
        .await?;

        Ok(festival)
    }

    /// Activate a festival, deactivating every other one in the same
    /// transaction. All-or-nothing: a failure leaves the previous active
    /// festival untouched. Idempotent when the target is already active.
    pub async fn activate(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE festivals
            SET status = $1
            WHERE status = $2 AND festival_id <> $3
            "#,
        )
        .bind(STATUS_INACTIVE)
        .bind(STATUS_ACTIVE)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query(
            r#"
            UPDATE festivals
            SET status = $1
            WHERE festival_id = $2
            "#,
        )
        .bind(STATUS_ACTIVE)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}
