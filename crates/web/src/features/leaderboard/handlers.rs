use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use storage::{
    SharedStore,
    dto::{
        leaderboard::{LeaderboardQuery, LeaderboardResponse},
        player::PlayerScoresResponse,
    },
    services::leaderboard_view,
};

use crate::error::{WebError, parse_player_id};

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Top scores ranked by position", body = LeaderboardResponse),
        (status = 400, description = "Invalid limit")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(store): State<SharedStore>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;
    query.validate().map_err(WebError::BadRequest)?;

    let leaderboard = leaderboard_view::top_n(store.as_ref(), query.limit).await?;

    Ok(Json(LeaderboardResponse { leaderboard }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/players/{id}/scores",
    params(
        ("id" = i64, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player scores, best first", body = PlayerScoresResponse),
        (status = 400, description = "Invalid player ID"),
        (status = 404, description = "Player not found")
    ),
    tag = "leaderboard"
)]
pub async fn get_player_scores(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_player_id(&id)?;
    let history = leaderboard_view::player_history(store.as_ref(), id).await?;

    Ok(Json(PlayerScoresResponse::from(history)).into_response())
}
