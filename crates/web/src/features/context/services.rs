use sqlx::PgPool;
use storage::{
    dto::context::ActiveContextResponse,
    error::Result,
    services::context,
};

/// Resolve the active festival/event pair as of this request
pub async fn active_context(pool: &PgPool) -> Result<ActiveContextResponse> {
    let snapshot = context::active_context(pool).await?;

    Ok(ActiveContextResponse {
        festival: snapshot.festival.map(Into::into),
        event: snapshot.event.map(Into::into),
    })
}
