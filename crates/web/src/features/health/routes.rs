use axum::{Router, routing::get};
use storage::SharedStore;

use super::handlers::health;

pub fn routes() -> Router<SharedStore> {
    Router::new().route("/health", get(health))
}
