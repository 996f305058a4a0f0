use sqlx::PgPool;
use uuid::Uuid;

use crate::chunk;
use crate::dto::sample::SampleData;
use crate::error::{Result, StorageError};
use crate::models::Sample;

/// Repository for Sample database operations
pub struct SampleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SampleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a sample by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Sample> {
        let sample = sqlx::query_as::<_, Sample>(
            r#"
            SELECT sample_id, producer_id, category_id, sample_code, year,
                   alcohol_strength, display_order, created_at
            FROM samples
            WHERE sample_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(sample)
    }

    /// List the samples of a category in display order
    pub async fn list_for_category(&self, category_id: Uuid) -> Result<Vec<Sample>> {
        let samples = sqlx::query_as::<_, Sample>(
            r#"
            SELECT sample_id, producer_id, category_id, sample_code, year,
                   alcohol_strength, display_order, created_at
            FROM samples
            WHERE category_id = $1
            ORDER BY display_order, created_at
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(samples)
    }

    /// List the samples of a category set, chunked per the filter cap.
    /// The merged result is re-sorted so display ordering holds across
    /// chunk boundaries.
    pub async fn list_for_categories(&self, category_ids: &[Uuid]) -> Result<Vec<Sample>> {
        let mut batches = Vec::new();

        for chunk in chunk::chunks(category_ids) {
            let batch = sqlx::query_as::<_, Sample>(
                r#"
                SELECT sample_id, producer_id, category_id, sample_code, year,
                       alcohol_strength, display_order, created_at
                FROM samples
                WHERE category_id = ANY($1)
                "#,
            )
            .bind(chunk)
            .fetch_all(self.pool)
            .await?;

            batches.push(batch);
        }

        let mut samples = chunk::merge_unique(batches, |s| s.sample_id);
        samples.sort_by(|a, b| {
            (a.display_order, a.created_at).cmp(&(b.display_order, b.created_at))
        });

        Ok(samples)
    }

    /// Ids of the samples under a category, for guard existence probes
    pub async fn ids_for_category(&self, category_id: Uuid) -> Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT sample_id
            FROM samples
            WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    /// Create a new sample
    pub async fn create(&self, data: &SampleData) -> Result<Sample> {
        let sample = sqlx::query_as::<_, Sample>(
            r#"
            INSERT INTO samples (producer_id, category_id, sample_code, year,
                                 alcohol_strength, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING sample_id, producer_id, category_id, sample_code, year,
                      alcohol_strength, display_order, created_at
            "#,
        )
        .bind(data.producer_id)
        .bind(data.category_id)
        .bind(&data.sample_code)
        .bind(data.year)
        .bind(data.alcohol_strength)
        .bind(data.display_order)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // Handle unique constraint violations for sample_code
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Sample code already exists".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(sample)
    }

    /// Update an existing sample
    pub async fn update(&self, id: Uuid, data: &SampleData) -> Result<Sample> {
        let sample = sqlx::query_as::<_, Sample>(
            r#"
            UPDATE samples
            SET
                producer_id = $2,
                category_id = $3,
                sample_code = $4,
                year = $5,
                alcohol_strength = $6,
                display_order = $7
            WHERE sample_id = $1
            RETURNING sample_id, producer_id, category_id, sample_code, year,
                      alcohol_strength, display_order, created_at
            "#,
        )
        .bind(id)
        .bind(data.producer_id)
        .bind(data.category_id)
        .bind(&data.sample_code)
        .bind(data.year)
        .bind(data.alcohol_strength)
        .bind(data.display_order)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Sample code already exists".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(sample)
    }
}
