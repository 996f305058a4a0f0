use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_event_results;

pub fn routes() -> Router<Database> {
    Router::new().route("/events/:event_id/results", get(get_event_results))
}
