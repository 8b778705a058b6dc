use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

use crate::error::StorageError;
use crate::models::{Player, PlayerName, Score};
use crate::services::leaderboard_view::PlayerHistory;
use crate::services::player_registry::Registration;

/// Request payload for registering a player
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerRequest {
    #[serde(default)]
    pub name: String,
}

impl CreatePlayerRequest {
    /// The trimmed, checked name to register. A rejected name is reported
    /// against the `name` field.
    pub fn player_name(&self) -> Result<PlayerName, ValidationErrors> {
        PlayerName::parse(&self.name).map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("name", name_error(e));
            errors
        })
    }
}

/// Response for a registration, `message` is set when the player already existed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterPlayerResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&Registration> for RegisterPlayerResponse {
    fn from(registration: &Registration) -> Self {
        let player = registration.player();
        Self {
            id: player.id,
            name: player.name.clone(),
            message: (!registration.is_created()).then(|| "Player already exists".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            created_at: player.created_at,
        }
    }
}

/// A player's scores, best first, with their personal best
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoresResponse {
    pub player_id: i64,
    pub player_name: String,
    pub top_score: i32,
    pub scores: Vec<PlayerScoreEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerScoreEntry {
    pub id: i64,
    pub score: i32,
    pub date: NaiveDateTime,
}

impl From<Score> for PlayerScoreEntry {
    fn from(score: Score) -> Self {
        Self {
            id: score.id,
            score: score.value,
            date: score.created_at,
        }
    }
}

impl From<PlayerHistory> for PlayerScoresResponse {
    fn from(history: PlayerHistory) -> Self {
        Self {
            player_id: history.player.id,
            player_name: history.player.name,
            top_score: history.top_score,
            scores: history
                .scores
                .into_iter()
                .map(PlayerScoreEntry::from)
                .collect(),
        }
    }
}

fn name_error(error: StorageError) -> ValidationError {
    let message = match error {
        StorageError::Validation(msg) => msg,
        other => other.to_string(),
    };
    let mut error = ValidationError::new("player_name");
    error.message = Some(message.into());
    error
}
