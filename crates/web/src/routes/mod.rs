use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use storage::SharedStore;

use crate::error::WebError;
use crate::features::{health, leaderboard, players, scores};

pub fn router(store: SharedStore) -> Router {
    let api = Router::new()
        .merge(health::routes::routes())
        .merge(players::routes::routes())
        .merge(scores::routes::routes())
        .merge(leaderboard::routes::routes());

    Router::new()
        .route("/", get(index))
        .nest("/api", api)
        .fallback(not_found)
        .with_state(store)
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Leaderboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/health",
            "createPlayer": "POST /api/players",
            "getPlayer": "GET /api/players/:id",
            "submitScore": "POST /api/scores",
            "getLeaderboard": "GET /api/leaderboard",
            "getPlayerScores": "GET /api/players/:id/scores"
        }
    }))
}

async fn not_found() -> WebError {
    WebError::NotFound
}
