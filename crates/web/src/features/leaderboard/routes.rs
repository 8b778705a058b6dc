use axum::{Router, routing::get};
use storage::SharedStore;

use super::handlers::{get_leaderboard, get_player_scores};

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/players/:id/scores", get(get_player_scores))
}
