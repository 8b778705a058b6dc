use axum::{Router, routing::post};
use storage::SharedStore;

use super::handlers::submit_score;

pub fn routes() -> Router<SharedStore> {
    Router::new().route("/scores", post(submit_score))
}
