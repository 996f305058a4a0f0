use sqlx::PgPool;
use storage::{dto::results::EventResultsResponse, error::Result, services::results};
use uuid::Uuid;

/// Aggregate full results for one event from a point-in-time snapshot
pub async fn event_results(pool: &PgPool, event_id: Uuid) -> Result<EventResultsResponse> {
    results::event_results(pool, event_id).await
}
