use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{FestivalEvent, STATUS_ACTIVE, STATUS_INACTIVE};

/// Repository for FestivalEvent database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events of a festival, newest first
    pub async fn list_for_festival(&self, festival_id: Uuid) -> Result<Vec<FestivalEvent>> {
        let events = sqlx::query_as::<_, FestivalEvent>(
            r#"
            SELECT event_id, festival_id, name, year, status, closed_at, created_at
            FROM events
            WHERE festival_id = $1
            ORDER BY year DESC, created_at DESC
            "#,
        )
        .bind(festival_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Get an event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<FestivalEvent> {
        let event = sqlx::query_as::<_, FestivalEvent>(
            r#"
            SELECT event_id, festival_id, name, year, status, closed_at, created_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Get the single active event of a festival, if any
    pub async fn find_active(&self, festival_id: Uuid) -> Result<Option<FestivalEvent>> {
        let event = sqlx::query_as::<_, FestivalEvent>(
            r#"
            SELECT event_id, festival_id, name, year, status, closed_at, created_at
            FROM events
            WHERE festival_id = $1 AND status = $2
            LIMIT 1
            "#,
        )
        .bind(festival_id)
        .bind(STATUS_ACTIVE)
        .fetch_optional(self.pool)
        .await?;

        Ok(event)
    }

    /// Create a new event in the inactive state
    pub async fn create(&self, festival_id: Uuid, name: &str, year: i32) -> Result<FestivalEvent> {
        let event = sqlx::query_as::<_, FestivalEvent>(
            r#"
            INSERT INTO events (festival_id, name, year, status, closed_at)
            VALUES ($1, $2, $3, $4, NULL)
            RETURNING event_id, festival_id, name, year, status, closed_at, created_at
            "#,
        )
        .bind(festival_id)
        .bind(name)
        .bind(year)
        .bind(STATUS_INACTIVE)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Activate an event of a festival, deactivating the festival's other
    /// events in the same transaction. All-or-nothing.
    pub async fn activate(&self, festival_id: Uuid, event_id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE events
            SET status = $1
            WHERE festival_id = $2 AND status = $3 AND event_id <> $4
            "#,
        )
        .bind(STATUS_INACTIVE)
        .bind(festival_id)
        .bind(STATUS_ACTIVE)
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query(
            r#"
            UPDATE events
            SET status = $1
            WHERE event_id = $2 AND festival_id = $3
            "#,
        )
        .bind(STATUS_ACTIVE)
        .bind(event_id)
        .bind(festival_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}
