use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::sample::{SampleData, SampleResponse}};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/samples/{sample_id}",
    params(
        ("sample_id" = Uuid, Path, description = "Sample ID")
    ),
    responses(
        (status = 200, description = "Sample found", body = SampleResponse),
        (status = 404, description = "Sample not found")
    ),
    tag = "samples"
)]
pub async fn get_sample(
    State(db): State<Database>,
    Path(sample_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let sample = services::get_sample(db.pool(), sample_id).await?;

    Ok(Json(SampleResponse::from(sample)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{category_id}/samples",
    params(
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "The category's samples in display order", body = Vec<SampleResponse>)
    ),
    tag = "samples"
)]
pub async fn list_samples(
    State(db): State<Database>,
    Path(category_id): Path<Uuid>,
) -> Result<Json<Vec<SampleResponse>>, WebError> {
    let samples = services::list_samples(db.pool(), category_id).await?;

    let response: Vec<SampleResponse> = samples.into_iter().map(SampleResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/samples",
    request_body = SampleData,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Sample created successfully", body = SampleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Sample code already exists")
    ),
    tag = "samples"
)]
pub async fn create_sample(
    State(db): State<Database>,
    Json(req): Json<SampleData>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sample = services::create_sample(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(SampleResponse::from(sample))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/samples/{sample_id}",
    params(
        ("sample_id" = Uuid, Path, description = "Sample ID")
    ),
    request_body = SampleData,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sample updated successfully", body = SampleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Sample not found"),
        (status = 409, description = "Sample code already exists")
    ),
    tag = "samples"
)]
pub async fn update_sample(
    State(db): State<Database>,
    Path(sample_id): Path<Uuid>,
    Json(req): Json<SampleData>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sample = services::update_sample(db.pool(), sample_id, &req).await?;

    Ok(Json(SampleResponse::from(sample)).into_response())
}
