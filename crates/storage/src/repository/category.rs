use sqlx::PgPool;
use uuid::Uuid;

use crate::chunk;
use crate::error::{Result, StorageError};
use crate::models::Category;

/// Repository for Category database operations
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories of an event
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, event_id, name, status, created_at
            FROM categories
            WHERE event_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get categories by an arbitrarily large id set, chunked per the
    /// filter cap and merged without duplicates.
    pub async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Category>> {
        let mut batches = Vec::new();

        for chunk in chunk::chunks(ids) {
            let batch = sqlx::query_as::<_, Category>(
                r#"
                SELECT category_id, event_id, name, status, created_at
                FROM categories
                WHERE category_id = ANY($1)
                ORDER BY created_at
                "#,
            )
            .bind(chunk)
            .fetch_all(self.pool)
            .await?;

            batches.push(batch);
        }

        Ok(chunk::merge_unique(batches, |c| c.category_id))
    }

    /// Get a category by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, event_id, name, status, created_at
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    /// Create a new category
    pub async fn create(&self, event_id: Uuid, name: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (event_id, name, status)
            VALUES ($1, $2, 'active')
            RETURNING category_id, event_id, name, status, created_at
            "#,
        )
        .bind(event_id)
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// Delete a category row. The score-existence guard lives in
    /// `services::lifecycle`; callers must go through it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
