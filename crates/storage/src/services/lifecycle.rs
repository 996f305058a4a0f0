use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::repository::assignment::AssignmentRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::sample::SampleRepository;
use crate::repository::score::ScoreRepository;

/// A category is deletable only while no sample under it has a score from
/// any judge. The probe short-circuits on the first scored chunk.
pub async fn can_delete_category(pool: &PgPool, category_id: Uuid) -> Result<bool> {
    let sample_ids = SampleRepository::new(pool)
        .ids_for_category(category_id)
        .await?;

    if sample_ids.is_empty() {
        return Ok(true);
    }

    let any_scored = ScoreRepository::new(pool)
        .any_for_samples(&sample_ids)
        .await?;

    Ok(!any_scored)
}

/// Delete a category. The guard is re-run immediately before the delete,
/// never trusting a previously computed answer.
pub async fn delete_category(pool: &PgPool, category_id: Uuid) -> Result<()> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(category_id).await?;

    if !can_delete_category(pool, category_id).await? {
        return Err(StorageError::DeleteBlocked);
    }

    repo.delete(category_id).await
}

/// Remove a judge's assignment, blocked while that judge has any score for
/// a sample of the category. Lock state is irrelevant here.
pub async fn unassign_judge(pool: &PgPool, judge_id: Uuid, category_id: Uuid) -> Result<()> {
    let sample_ids = SampleRepository::new(pool)
        .ids_for_category(category_id)
        .await?;

    if !sample_ids.is_empty() {
        let has_scores = ScoreRepository::new(pool)
            .any_for_judge_in_samples(judge_id, &sample_ids)
            .await?;

        if has_scores {
            return Err(StorageError::UnassignBlocked);
        }
    }

    AssignmentRepository::new(pool)
        .delete(judge_id, category_id)
        .await
}
