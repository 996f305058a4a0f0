use sqlx::PgPool;
use storage::{
    dto::sample::SampleData,
    error::Result,
    models::Sample,
    repository::sample::SampleRepository,
};
use uuid::Uuid;

/// Get a sample by ID
pub async fn get_sample(pool: &PgPool, sample_id: Uuid) -> Result<Sample> {
    let repo = SampleRepository::new(pool);
    repo.find_by_id(sample_id).await
}

/// List the samples of a category in display order
pub async fn list_samples(pool: &PgPool, category_id: Uuid) -> Result<Vec<Sample>> {
    let repo = SampleRepository::new(pool);
    repo.list_for_category(category_id).await
}

/// Create a new sample
pub async fn create_sample(pool: &PgPool, data: &SampleData) -> Result<Sample> {
    let repo = SampleRepository::new(pool);
    repo.create(data).await
}

/// Update a sample
pub async fn update_sample(pool: &PgPool, sample_id: Uuid, data: &SampleData) -> Result<Sample> {
    let repo = SampleRepository::new(pool);
    repo.update(sample_id, data).await
}
