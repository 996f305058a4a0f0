use sqlx::PgPool;
use storage::{
    dto::producer::ProducerData,
    error::Result,
    models::Producer,
    repository::producer::ProducerRepository,
};
use uuid::Uuid;

/// List all producers, alphabetically
pub async fn list_producers(pool: &PgPool) -> Result<Vec<Producer>> {
    let repo = ProducerRepository::new(pool);
    repo.list().await
}

/// Create a new producer
pub async fn create_producer(pool: &PgPool, data: &ProducerData) -> Result<Producer> {
    let repo = ProducerRepository::new(pool);
    repo.create(data).await
}

/// Update a producer
pub async fn update_producer(
    pool: &PgPool,
    producer_id: Uuid,
    data: &ProducerData,
) -> Result<Producer> {
    let repo = ProducerRepository::new(pool);
    repo.update(producer_id, data).await
}
