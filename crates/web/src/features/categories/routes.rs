use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    can_delete_category, create_category, delete_category, get_categories_by_ids, get_category,
    list_categories,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/events/:event_id/categories", post(create_category))
        .route("/categories/:category_id", delete(delete_category))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/events/:event_id/categories", get(list_categories))
        .route("/categories", get(get_categories_by_ids))
        .route("/categories/:category_id", get(get_category))
        .route("/categories/:category_id/can-delete", get(can_delete_category))
        .merge(protected)
}
