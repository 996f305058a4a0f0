use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    assign_judge, list_for_categories, list_for_judge, lock_category, unassign_judge,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/assignments", post(assign_judge))
        .route("/assignments/:judge_id/:category_id", delete(unassign_judge))
        .route("/assignments/:judge_id/:category_id/lock", post(lock_category))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/assignments", get(list_for_categories))
        .route("/judges/:judge_id/assignments", get(list_for_judge))
        .merge(protected)
}
