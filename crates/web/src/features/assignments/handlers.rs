use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::assignment::{AssignJudgeRequest, AssignmentResponse},
    dto::category::CategoryIdsFilter,
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = AssignJudgeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Judge assigned; re-assigning resets the pair to active", body = AssignmentResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "assignments"
)]
pub async fn assign_judge(
    State(db): State<Database>,
    Json(req): Json<AssignJudgeRequest>,
) -> Result<Response, WebError> {
    let assignment = services::assign_judge(db.pool(), req.judge_id, req.category_id).await?;

    Ok((StatusCode::CREATED, Json(AssignmentResponse::from(assignment))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/assignments/{judge_id}/{category_id}",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Assignment removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Judge has recorded scores in this category")
    ),
    tag = "assignments"
)]
pub async fn unassign_judge(
    State(db): State<Database>,
    Path((judge_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::unassign_judge(db.pool(), judge_id, category_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/assignments/{judge_id}/{category_id}/lock",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Assignment locked; score writes are now rejected", body = AssignmentResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Assignment not found")
    ),
    tag = "assignments"
)]
pub async fn lock_category(
    State(db): State<Database>,
    Path((judge_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let assignment = services::lock_category(db.pool(), judge_id, category_id).await?;

    Ok(Json(AssignmentResponse::from(assignment)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/judges/{judge_id}/assignments",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    responses(
        (status = 200, description = "The judge's assignments", body = Vec<AssignmentResponse>)
    ),
    tag = "assignments"
)]
pub async fn list_for_judge(
    State(db): State<Database>,
    Path(judge_id): Path<Uuid>,
) -> Result<Json<Vec<AssignmentResponse>>, WebError> {
    let assignments = services::list_for_judge(db.pool(), judge_id).await?;

    let response: Vec<AssignmentResponse> =
        assignments.into_iter().map(AssignmentResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/assignments",
    params(CategoryIdsFilter),
    responses(
        (status = 200, description = "Assignments across the category set, chunk-merged without duplicates", body = Vec<AssignmentResponse>),
        (status = 400, description = "Malformed id list")
    ),
    tag = "assignments"
)]
pub async fn list_for_categories(
    State(db): State<Database>,
    Query(filter): Query<CategoryIdsFilter>,
) -> Result<Json<Vec<AssignmentResponse>>, WebError> {
    let ids = filter.parse_ids().map_err(WebError::BadRequest)?;

    let assignments = services::list_for_categories(db.pool(), &ids).await?;

    let response: Vec<AssignmentResponse> =
        assignments.into_iter().map(AssignmentResponse::from).collect();

    Ok(Json(response))
}
