use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::producer::{ProducerData, ProducerResponse}};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/producers",
    responses(
        (status = 200, description = "List all producers successfully", body = Vec<ProducerResponse>)
    ),
    tag = "producers"
)]
pub async fn list_producers(
    State(db): State<Database>,
) -> Result<Json<Vec<ProducerResponse>>, WebError> {
    let producers = services::list_producers(db.pool()).await?;

    let response: Vec<ProducerResponse> =
        producers.into_iter().map(ProducerResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/producers",
    request_body = ProducerData,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Producer created successfully", body = ProducerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "producers"
)]
pub async fn create_producer(
    State(db): State<Database>,
    Json(req): Json<ProducerData>,
) -> Result<Response, WebError> {
    req.validate()?;

    let producer = services::create_producer(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ProducerResponse::from(producer))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/producers/{producer_id}",
    params(
        ("producer_id" = Uuid, Path, description = "Producer ID")
    ),
    request_body = ProducerData,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Producer updated successfully", body = ProducerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Producer not found")
    ),
    tag = "producers"
)]
pub async fn update_producer(
    State(db): State<Database>,
    Path(producer_id): Path<Uuid>,
    Json(req): Json<ProducerData>,
) -> Result<Response, WebError> {
    req.validate()?;

    let producer = services::update_producer(db.pool(), producer_id, &req).await?;

    Ok(Json(ProducerResponse::from(producer)).into_response())
}
