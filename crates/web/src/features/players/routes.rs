use axum::{
    Router,
    routing::{get, post},
};
use storage::SharedStore;

use super::handlers::{create_player, get_player};

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/players", post(create_player))
        .route("/players/:id", get(get_player))
}
