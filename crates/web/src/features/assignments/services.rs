use sqlx::PgPool;
use storage::{
    error::Result,
    models::JudgeAssignment,
    repository::assignment::AssignmentRepository,
    services::lifecycle,
};
use uuid::Uuid;

/// Assign a judge to a category (idempotent upsert to `active`)
pub async fn assign_judge(
    pool: &PgPool,
    judge_id: Uuid,
    category_id: Uuid,
) -> Result<JudgeAssignment> {
    let repo = AssignmentRepository::new(pool);
    repo.assign(judge_id, category_id).await
}

/// Remove a judge from a category, blocked while the judge has scores there
pub async fn unassign_judge(pool: &PgPool, judge_id: Uuid, category_id: Uuid) -> Result<()> {
    lifecycle::unassign_judge(pool, judge_id, category_id).await
}

/// Lock a (judge, category) pair; one-way
pub async fn lock_category(
    pool: &PgPool,
    judge_id: Uuid,
    category_id: Uuid,
) -> Result<JudgeAssignment> {
    let repo = AssignmentRepository::new(pool);
    repo.lock(judge_id, category_id).await
}

/// List all assignments of a judge
pub async fn list_for_judge(pool: &PgPool, judge_id: Uuid) -> Result<Vec<JudgeAssignment>> {
    let repo = AssignmentRepository::new(pool);
    repo.list_for_judge(judge_id).await
}

/// List assignments across a category set, chunked internally
pub async fn list_for_categories(
    pool: &PgPool,
    category_ids: &[Uuid],
) -> Result<Vec<JudgeAssignment>> {
    let repo = AssignmentRepository::new(pool);
    repo.list_for_categories(category_ids).await
}
