use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{activate_festival, create_festival, list_festivals};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_festival))
        .route("/:festival_id/activate", post(activate_festival))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_festivals)).merge(protected)
}
