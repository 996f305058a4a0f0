use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::festival::{CreateFestivalRequest, FestivalResponse}};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/festivals",
    responses(
        (status = 200, description = "List all festivals successfully", body = Vec<FestivalResponse>)
    ),
    tag = "festivals"
)]
pub async fn list_festivals(
    State(db): State<Database>,
) -> Result<Json<Vec<FestivalResponse>>, WebError> {
    let festivals = services::list_festivals(db.pool()).await?;

    let response: Vec<FestivalResponse> = festivals.into_iter().map(FestivalResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/festivals",
    request_body = CreateFestivalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Festival created successfully", body = FestivalResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "festivals"
)]
pub async fn create_festival(
    State(db): State<Database>,
    Json(req): Json<CreateFestivalRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let festival = services::create_festival(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(FestivalResponse::from(festival))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/festivals/{festival_id}/activate",
    params(
        ("festival_id" = Uuid, Path, description = "Festival ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Festival is now the single active one", body = FestivalResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Festival not found")
    ),
    tag = "festivals"
)]
pub async fn activate_festival(
    State(db): State<Database>,
    Path(festival_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let festival = services::activate_festival(db.pool(), festival_id).await?;

    Ok(Json(FestivalResponse::from(festival)).into_response())
}
