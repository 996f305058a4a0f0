use sqlx::PgPool;
use storage::{
    dto::score::SaveScoreRequest,
    error::Result,
    models::Score,
    services::scoring,
};
use uuid::Uuid;

/// Fetch a single score if the judge has already scored the sample
pub async fn get_score(pool: &PgPool, judge_id: Uuid, sample_id: Uuid) -> Result<Option<Score>> {
    scoring::get_score(pool, judge_id, sample_id).await
}

/// Save (insert or overwrite) a score, rejected if the category is locked
/// for this judge
pub async fn save_score(
    pool: &PgPool,
    judge_id: Uuid,
    sample_id: Uuid,
    req: &SaveScoreRequest,
) -> Result<Score> {
    scoring::save_score(pool, judge_id, sample_id, &req.criteria(), &req.comment).await
}

/// All scores a judge has recorded so far
pub async fn scores_for_judge(pool: &PgPool, judge_id: Uuid) -> Result<Vec<Score>> {
    scoring::scores_for_judge(pool, judge_id).await
}
