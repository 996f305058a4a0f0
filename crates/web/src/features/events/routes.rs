use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{activate_event, create_event, get_event, list_events};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/festivals/:festival_id/events", post(create_event))
        .route(
            "/festivals/:festival_id/events/:event_id/activate",
            post(activate_event),
        )
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/events/:event_id", get(get_event))
        .route("/festivals/:festival_id/events", get(list_events))
        .merge(protected)
}
