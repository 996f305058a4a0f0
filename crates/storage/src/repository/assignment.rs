use sqlx::PgPool;
use uuid::Uuid;

use crate::chunk;
use crate::error::{Result, StorageError};
use crate::models::{ASSIGNMENT_ACTIVE, ASSIGNMENT_FINISHED, JudgeAssignment};

/// Repository for JudgeAssignment database operations, keyed by
/// (judge_id, category_id)
pub struct AssignmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AssignmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the assignment of a judge for a category, if any
    pub async fn find(&self, judge_id: Uuid, category_id: Uuid) -> Result<Option<JudgeAssignment>> {
        let assignment = sqlx::query_as::<_, JudgeAssignment>(
            r#"
            SELECT judge_id, category_id, status
            FROM judge_assignments
            WHERE judge_id = $1 AND category_id = $2
            "#,
        )
        .bind(judge_id)
        .bind(category_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(assignment)
    }

    /// Upsert an assignment as `active`. An explicit re-assign of a
    /// `finished` pair resets it to `active`.
    pub async fn assign(&self, judge_id: Uuid, category_id: Uuid) -> Result<JudgeAssignment> {
        let assignment = sqlx::query_as::<_, JudgeAssignment>(
            r#"
            INSERT INTO judge_assignments (judge_id, category_id, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (judge_id, category_id) DO UPDATE SET status = $3
            RETURNING judge_id, category_id, status
            "#,
        )
        .bind(judge_id)
        .bind(category_id)
        .bind(ASSIGNMENT_ACTIVE)
        .fetch_one(self.pool)
        .await?;

        Ok(assignment)
    }

    /// One-way lock of a (judge, category) pair
    pub async fn lock(&self, judge_id: Uuid, category_id: Uuid) -> Result<JudgeAssignment> {
        let assignment = sqlx::query_as::<_, JudgeAssignment>(
            r#"
            UPDATE judge_assignments
            SET status = $3
            WHERE judge_id = $1 AND category_id = $2
            RETURNING judge_id, category_id, status
            "#,
        )
        .bind(judge_id)
        .bind(category_id)
        .bind(ASSIGNMENT_FINISHED)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(assignment)
    }

    /// Delete an assignment row. The score-existence guard lives in
    /// `services::lifecycle`; callers must go through it.
    pub async fn delete(&self, judge_id: Uuid, category_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM judge_assignments
            WHERE judge_id = $1 AND category_id = $2
            "#,
        )
        .bind(judge_id)
        .bind(category_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// List all assignments of a judge
    pub async fn list_for_judge(&self, judge_id: Uuid) -> Result<Vec<JudgeAssignment>> {
        let assignments = sqlx::query_as::<_, JudgeAssignment>(
            r#"
            SELECT judge_id, category_id, status
            FROM judge_assignments
            WHERE judge_id = $1
            "#,
        )
        .bind(judge_id)
        .fetch_all(self.pool)
        .await?;

        Ok(assignments)
    }

    /// List assignments across a category set of any size, chunked per the
    /// filter cap and merged without duplicates.
    pub async fn list_for_categories(&self, category_ids: &[Uuid]) -> Result<Vec<JudgeAssignment>> {
        let mut batches = Vec::new();

        for chunk in chunk::chunks(category_ids) {
            let batch = sqlx::query_as::<_, JudgeAssignment>(
                r#"
                SELECT judge_id, category_id, status
                FROM judge_assignments
                WHERE category_id = ANY($1)
                "#,
            )
            .bind(chunk)
            .fetch_all(self.pool)
            .await?;

            batches.push(batch);
        }

        Ok(chunk::merge_unique(batches, |a| (a.judge_id, a.category_id)))
    }
}
