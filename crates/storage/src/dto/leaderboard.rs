use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 5;
pub const MIN_LEADERBOARD_LIMIT: i64 = 1;
pub const MAX_LEADERBOARD_LIMIT: i64 = 100;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    /// Number of entries to return (1-100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LEADERBOARD_LIMIT
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl LeaderboardQuery {
    pub fn validate(&self) -> Result<(), String> {
        validate_limit(self.limit)
    }
}

pub fn validate_limit(limit: i64) -> Result<(), String> {
    if !(MIN_LEADERBOARD_LIMIT..=MAX_LEADERBOARD_LIMIT).contains(&limit) {
        return Err(format!(
            "Limit must be between {} and {}",
            MIN_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT
        ));
    }
    Ok(())
}

/// One row of the global leaderboard. `rank` is the row position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub player_name: String,
    pub score: i32,
    pub date: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}
