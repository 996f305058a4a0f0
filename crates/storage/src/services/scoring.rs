use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{JudgeAssignment, Score, ScoreCriteria};
use crate::repository::assignment::AssignmentRepository;
use crate::repository::sample::SampleRepository;
use crate::repository::score::ScoreRepository;

/// A judge is blocked from writing only when their assignment for the
/// sample's category is explicitly `finished`. An absent assignment does
/// not block.
fn is_locked(assignment: Option<&JudgeAssignment>) -> bool {
    assignment.is_some_and(JudgeAssignment::is_finished)
}

pub async fn get_score(pool: &PgPool, judge_id: Uuid, sample_id: Uuid) -> Result<Option<Score>> {
    ScoreRepository::new(pool).find(judge_id, sample_id).await
}

pub async fn scores_for_judge(pool: &PgPool, judge_id: Uuid) -> Result<Vec<Score>> {
    ScoreRepository::new(pool).list_for_judge(judge_id).await
}

/// Save a judge's score for a sample.
///
/// Criterion values are validated against their ranges and the 0.05 step
/// before anything else; a locked (judge, category) assignment rejects the
/// write with `CategoryLocked`. Nothing is written on either failure.
/// On success the upsert preserves `scored_at` and refreshes `updated_at`.
pub async fn save_score(
    pool: &PgPool,
    judge_id: Uuid,
    sample_id: Uuid,
    criteria: &ScoreCriteria,
    comment: &str,
) -> Result<Score> {
    criteria.validate().map_err(StorageError::Validation)?;

    let sample = SampleRepository::new(pool).find_by_id(sample_id).await?;

    let assignment = AssignmentRepository::new(pool)
        .find(judge_id, sample.category_id)
        .await?;

    if is_locked(assignment.as_ref()) {
        return Err(StorageError::CategoryLocked);
    }

    ScoreRepository::new(pool)
        .upsert(judge_id, sample_id, criteria, comment)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ASSIGNMENT_ACTIVE, ASSIGNMENT_FINISHED};

    fn assignment(status: &str) -> JudgeAssignment {
        JudgeAssignment {
            judge_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_finished_assignment_locks_writes() {
        let finished = assignment(ASSIGNMENT_FINISHED);
        assert!(is_locked(Some(&finished)));
    }

    #[test]
    fn test_active_assignment_allows_writes() {
        let active = assignment(ASSIGNMENT_ACTIVE);
        assert!(!is_locked(Some(&active)));
    }

    #[test]
    fn test_missing_assignment_does_not_lock() {
        assert!(!is_locked(None));
    }
}
