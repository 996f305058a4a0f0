use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CanDeleteResponse, CategoryIdsFilter, CategoryResponse, CreateCategoryRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/categories",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "List the event's categories", body = Vec<CategoryResponse>)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<CategoryResponse>>, WebError> {
    let categories = services::list_categories(db.pool(), event_id).await?;

    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(CategoryIdsFilter),
    responses(
        (status = 200, description = "Categories matching the id set, chunk-merged without duplicates", body = Vec<CategoryResponse>),
        (status = 400, description = "Malformed id list")
    ),
    tag = "categories"
)]
pub async fn get_categories_by_ids(
    State(db): State<Database>,
    Query(filter): Query<CategoryIdsFilter>,
) -> Result<Json<Vec<CategoryResponse>>, WebError> {
    let ids = filter.parse_ids().map_err(WebError::BadRequest)?;

    let categories = services::get_categories_by_ids(db.pool(), &ids).await?;

    let response: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(db): State<Database>,
    Path(category_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let category = services::get_category(db.pool(), category_id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/categories",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateCategoryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), event_id, &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{category_id}/can-delete",
    params(
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Whether the category has no scored samples", body = CanDeleteResponse)
    ),
    tag = "categories"
)]
pub async fn can_delete_category(
    State(db): State<Database>,
    Path(category_id): Path<Uuid>,
) -> Result<Json<CanDeleteResponse>, WebError> {
    let can_delete = services::can_delete_category(db.pool(), category_id).await?;

    Ok(Json(CanDeleteResponse { can_delete }))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Category deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category has recorded scores")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(db): State<Database>,
    Path(category_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_category(db.pool(), category_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
