use axum::{Json, extract::State};
use storage::{Database, dto::context::ActiveContextResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/context",
    responses(
        (status = 200, description = "Active festival and event, either of which may be null", body = ActiveContextResponse)
    ),
    tag = "context"
)]
pub async fn get_active_context(
    State(db): State<Database>,
) -> Result<Json<ActiveContextResponse>, WebError> {
    let context = services::active_context(db.pool()).await?;

    Ok(Json(context))
}
