use axum::{
    Json,
    extract::{Path, State},
};
use storage::{Database, dto::results::EventResultsResponse};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/results",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Per-category results with samples ranked by exact average total", body = EventResultsResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "results"
)]
pub async fn get_event_results(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<EventResultsResponse>, WebError> {
    let results = services::event_results(db.pool(), event_id).await?;

    Ok(Json(results))
}
