use axum::{Router, routing::get};
use storage::Database;

use super::handlers::list_users;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_users))
}
