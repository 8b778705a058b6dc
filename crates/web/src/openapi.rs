use utoipa::OpenApi;

use crate::features::{health, leaderboard, players, scores};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health,
        players::handlers::create_player,
        players::handlers::get_player,
        scores::handlers::submit_score,
        leaderboard::handlers::get_leaderboard,
        leaderboard::handlers::get_player_scores,
    ),
    components(
        schemas(
            health::handlers::HealthResponse,
            storage::dto::player::CreatePlayerRequest,
            storage::dto::player::RegisterPlayerResponse,
            storage::dto::player::PlayerResponse,
            storage::dto::player::PlayerScoresResponse,
            storage::dto::player::PlayerScoreEntry,
            storage::dto::score::SubmitScoreRequest,
            storage::dto::score::ScoreSubmissionResponse,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::LeaderboardResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "players", description = "Player registration and lookup"),
        (name = "scores", description = "Score submission"),
        (name = "leaderboard", description = "Global ranking and player history"),
    )
)]
pub struct ApiDoc;
