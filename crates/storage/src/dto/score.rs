use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::Result;
use crate::models::{RankedScore, ScoreValue};

/// Request payload for submitting a score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "Invalid player ID"))]
    pub player_id: i64,

    #[validate(range(min = 0, max = 999_999, message = "Score must be between 0 and 999999"))]
    pub score: i64,
}

impl SubmitScoreRequest {
    pub fn score_value(&self) -> Result<ScoreValue> {
        ScoreValue::new(self.score)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmissionResponse {
    pub id: i64,
    pub player_id: i64,
    pub score: i32,
    /// Rank among all scores at submission time
    pub rank: i64,
}

impl From<RankedScore> for ScoreSubmissionResponse {
    fn from(ranked: RankedScore) -> Self {
        Self {
            id: ranked.score.id,
            player_id: ranked.score.player_id,
            score: ranked.score.value,
            rank: ranked.rank,
        }
    }
}
