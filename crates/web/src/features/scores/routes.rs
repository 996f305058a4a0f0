use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{get_score, save_score, scores_for_judge};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/scores/:judge_id/:sample_id", put(save_score))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/scores/:judge_id/:sample_id", get(get_score))
        .route("/judges/:judge_id/scores", get(scores_for_judge))
        .merge(protected)
}
