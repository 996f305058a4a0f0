use sqlx::PgPool;
use storage::{
    dto::category::CreateCategoryRequest,
    error::Result,
    models::Category,
    repository::category::CategoryRepository,
    services::lifecycle,
};
use uuid::Uuid;

/// List all categories of an event
pub async fn list_categories(pool: &PgPool, event_id: Uuid) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list_for_event(event_id).await
}

/// Get categories by id set, chunked internally
pub async fn get_categories_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list_by_ids(ids).await
}

/// Get a category by ID
pub async fn get_category(pool: &PgPool, category_id: Uuid) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(category_id).await
}

/// Create a new category
pub async fn create_category(
    pool: &PgPool,
    event_id: Uuid,
    request: &CreateCategoryRequest,
) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.create(event_id, &request.name).await
}

/// Whether the category is currently deletable
pub async fn can_delete_category(pool: &PgPool, category_id: Uuid) -> Result<bool> {
    lifecycle::can_delete_category(pool, category_id).await
}

/// Delete a category, re-running the score-existence guard first
pub async fn delete_category(pool: &PgPool, category_id: Uuid) -> Result<()> {
    lifecycle::delete_category(pool, category_id).await
}
