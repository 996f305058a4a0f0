use sqlx::PgPool;
use storage::{
    dto::festival::CreateFestivalRequest,
    error::Result,
    models::Festival,
    repository::festival::FestivalRepository,
};
use uuid::Uuid;

/// List all festivals, newest first
pub async fn list_festivals(pool: &PgPool) -> Result<Vec<Festival>> {
    let repo = FestivalRepository::new(pool);
    repo.list().await
}

/// Create a new festival in the inactive state
pub async fn create_festival(pool: &PgPool, request: &CreateFestivalRequest) -> Result<Festival> {
    let repo = FestivalRepository::new(pool);
    repo.create(&request.name).await
}

/// Make a festival the single active one
pub async fn activate_festival(pool: &PgPool, festival_id: Uuid) -> Result<Festival> {
    let repo = FestivalRepository::new(pool);
    repo.activate(festival_id).await?;
    repo.find_by_id(festival_id).await
}
