use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{create_sample, get_sample, list_samples, update_sample};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/samples", post(create_sample))
        .route("/samples/:sample_id", put(update_sample))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/samples/:sample_id", get(get_sample))
        .route("/categories/:category_id/samples", get(list_samples))
        .merge(protected)
}
