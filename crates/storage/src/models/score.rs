use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single entry of the score ledger. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: i64,
    pub player_id: i64,
    #[sqlx(rename = "score")]
    pub value: i32,
    pub created_at: NaiveDateTime,
}

impl Score {
    pub fn new(id: i64, player_id: i64, value: i32, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            player_id,
            value,
            created_at,
        }
    }
}

/// A freshly recorded score together with its count-based rank at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedScore {
    pub score: Score,
    pub rank: i64,
}

/// Score joined with its owner's name, as fetched for the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LeaderboardRow {
    pub score_id: i64,
    pub player_name: String,
    pub score: i32,
    pub created_at: NaiveDateTime,
}
