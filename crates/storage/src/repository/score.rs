use sqlx::PgPool;
use uuid::Uuid;

use crate::chunk;
use crate::error::Result;
use crate::models::{Score, ScoreCriteria};

/// Repository for Score database operations, keyed by (judge_id, sample_id)
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a judge's score for a sample, if any
    pub async fn find(&self, judge_id: Uuid, sample_id: Uuid) -> Result<Option<Score>> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            SELECT judge_id, sample_id, color, clarity, typicality, aroma, taste,
                   comment, scored_at, updated_at
            FROM scores
            WHERE judge_id = $1 AND sample_id = $2
            "#,
        )
        .bind(judge_id)
        .bind(sample_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(score)
    }

    /// Upsert a score. `scored_at` is written once on insert and left
    /// untouched on conflict; `updated_at` is refreshed either way.
    pub async fn upsert(
        &self,
        judge_id: Uuid,
        sample_id: Uuid,
        criteria: &ScoreCriteria,
        comment: &str,
    ) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (judge_id, sample_id, color, clarity, typicality,
                                aroma, taste, comment, scored_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now(), now())
            ON CONFLICT (judge_id, sample_id) DO UPDATE SET
                color = EXCLUDED.color,
                clarity = EXCLUDED.clarity,
                typicality = EXCLUDED.typicality,
                aroma = EXCLUDED.aroma,
                taste = EXCLUDED.taste,
                comment = EXCLUDED.comment,
                updated_at = now()
            RETURNING judge_id, sample_id, color, clarity, typicality, aroma, taste,
                      comment, scored_at, updated_at
            "#,
        )
        .bind(judge_id)
        .bind(sample_id)
        .bind(criteria.color)
        .bind(criteria.clarity)
        .bind(criteria.typicality)
        .bind(criteria.aroma)
        .bind(criteria.taste)
        .bind(comment)
        .fetch_one(self.pool)
        .await?;

        Ok(score)
    }

    /// List all scores recorded by a judge
    pub async fn list_for_judge(&self, judge_id: Uuid) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT judge_id, sample_id, color, clarity, typicality, aroma, taste,
                   comment, scored_at, updated_at
            FROM scores
            WHERE judge_id = $1
            "#,
        )
        .bind(judge_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// List all scores for a sample set of any size, chunked per the
    /// filter cap and merged without duplicates.
    pub async fn list_for_sample_ids(&self, sample_ids: &[Uuid]) -> Result<Vec<Score>> {
        let mut batches = Vec::new();

        for chunk in chunk::chunks(sample_ids) {
            let batch = sqlx::query_as::<_, Score>(
                r#"
                SELECT judge_id, sample_id, color, clarity, typicality, aroma, taste,
                       comment, scored_at, updated_at
                FROM scores
                WHERE sample_id = ANY($1)
                "#,
            )
            .bind(chunk)
            .fetch_all(self.pool)
            .await?;

            batches.push(batch);
        }

        Ok(chunk::merge_unique(batches, |s| (s.judge_id, s.sample_id)))
    }

    /// Whether any judge has scored any of the given samples. Probes one
    /// chunk at a time and short-circuits on the first hit.
    pub async fn any_for_samples(&self, sample_ids: &[Uuid]) -> Result<bool> {
        for chunk in chunk::chunks(sample_ids) {
            let hit = sqlx::query_scalar::<_, i32>(
                r#"
                SELECT 1
                FROM scores
                WHERE sample_id = ANY($1)
                LIMIT 1
                "#,
            )
            .bind(chunk)
            .fetch_optional(self.pool)
            .await?;

            if hit.is_some() {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Whether a specific judge has scored any of the given samples
    pub async fn any_for_judge_in_samples(
        &self,
        judge_id: Uuid,
        sample_ids: &[Uuid],
    ) -> Result<bool> {
        for chunk in chunk::chunks(sample_ids) {
            let hit = sqlx::query_scalar::<_, i32>(
                r#"
                SELECT 1
                FROM scores
                WHERE judge_id = $1 AND sample_id = ANY($2)
                LIMIT 1
                "#,
            )
            .bind(judge_id)
            .bind(chunk)
            .fetch_optional(self.pool)
            .await?;

            if hit.is_some() {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
