use sqlx::PgPool;
use storage::{
    dto::event::CreateEventRequest,
    error::Result,
    models::FestivalEvent,
    repository::event::EventRepository,
};
use uuid::Uuid;

/// List all events of a festival
pub async fn list_events(pool: &PgPool, festival_id: Uuid) -> Result<Vec<FestivalEvent>> {
    let repo = EventRepository::new(pool);
    repo.list_for_festival(festival_id).await
}

/// Get an event by ID
pub async fn get_event(pool: &PgPool, event_id: Uuid) -> Result<FestivalEvent> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(event_id).await
}

/// Create a new event in the inactive state
pub async fn create_event(
    pool: &PgPool,
    festival_id: Uuid,
    request: &CreateEventRequest,
) -> Result<FestivalEvent> {
    let repo = EventRepository::new(pool);
    repo.create(festival_id, &request.name, request.year).await
}

/// Make an event the single active one of its festival
pub async fn activate_event(
    pool: &PgPool,
    festival_id: Uuid,
    event_id: Uuid,
) -> Result<FestivalEvent> {
    let repo = EventRepository::new(pool);
    repo.activate(festival_id, event_id).await?;
    repo.find_by_id(event_id).await
}
