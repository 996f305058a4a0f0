use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::score::{SaveScoreRequest, ScoreResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scores/{judge_id}/{sample_id}",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID"),
        ("sample_id" = Uuid, Path, description = "Sample ID")
    ),
    responses(
        (status = 200, description = "The score, or null if the judge has not scored this sample", body = Option<ScoreResponse>)
    ),
    tag = "scores"
)]
pub async fn get_score(
    State(db): State<Database>,
    Path((judge_id, sample_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Option<ScoreResponse>>, WebError> {
    let score = services::get_score(db.pool(), judge_id, sample_id).await?;

    Ok(Json(score.map(ScoreResponse::from)))
}

#[utoipa::path(
    put,
    path = "/api/scores/{judge_id}/{sample_id}",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID"),
        ("sample_id" = Uuid, Path, description = "Sample ID")
    ),
    request_body = SaveScoreRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Score saved; the original scoring timestamp survives overwrites", body = ScoreResponse),
        (status = 400, description = "Criterion out of range or off the 0.05 step"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Sample not found"),
        (status = 409, description = "Category is locked for this judge")
    ),
    tag = "scores"
)]
pub async fn save_score(
    State(db): State<Database>,
    Path((judge_id, sample_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<SaveScoreRequest>,
) -> Result<Json<ScoreResponse>, WebError> {
    req.validate()?;

    let score = services::save_score(db.pool(), judge_id, sample_id, &req).await?;

    Ok(Json(ScoreResponse::from(score)))
}

#[utoipa::path(
    get,
    path = "/api/judges/{judge_id}/scores",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    responses(
        (status = 200, description = "All scores the judge has recorded", body = Vec<ScoreResponse>)
    ),
    tag = "scores"
)]
pub async fn scores_for_judge(
    State(db): State<Database>,
    Path(judge_id): Path<Uuid>,
) -> Result<Json<Vec<ScoreResponse>>, WebError> {
    let scores = services::scores_for_judge(db.pool(), judge_id).await?;

    let response: Vec<ScoreResponse> = scores.into_iter().map(ScoreResponse::from).collect();

    Ok(Json(response))
}
