use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::event::{CreateEventRequest, EventResponse}};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), event_id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/festivals/{festival_id}/events",
    params(
        ("festival_id" = Uuid, Path, description = "Festival ID")
    ),
    responses(
        (status = 200, description = "List the festival's events", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    Path(festival_id): Path<Uuid>,
) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(db.pool(), festival_id).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/festivals/{festival_id}/events",
    params(
        ("festival_id" = Uuid, Path, description = "Festival ID")
    ),
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created successfully", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Path(festival_id): Path<Uuid>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), festival_id, &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/festivals/{festival_id}/events/{event_id}/activate",
    params(
        ("festival_id" = Uuid, Path, description = "Festival ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event is now the festival's single active one", body = EventResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn activate_event(
    State(db): State<Database>,
    Path((festival_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let event = services::activate_event(db.pool(), festival_id, event_id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}
