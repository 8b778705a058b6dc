use std::sync::Arc;

use crate::error::Result;
use crate::models::{LeaderboardRow, Player, PlayerName, Score, ScoreValue};

/// Operations the leaderboard core needs from a backing store.
///
/// Implementations must enforce name uniqueness (reporting
/// [`StorageError::ConstraintViolation`](crate::error::StorageError::ConstraintViolation))
/// and score ownership (reporting
/// [`StorageError::ReferentialIntegrity`](crate::error::StorageError::ReferentialIntegrity)).
/// Orderings are `score DESC, id ASC`.
#[async_trait::async_trait]
pub trait LeaderboardStore: Send + Sync {
    async fn find_player_by_id(&self, id: i64) -> Result<Option<Player>>;

    async fn find_player_by_name(&self, name: &PlayerName) -> Result<Option<Player>>;

    async fn insert_player(&self, name: &PlayerName) -> Result<Player>;

    /// Appends a score and counts the scores strictly greater than it, as one unit.
    async fn insert_score_counting_above(
        &self,
        player_id: i64,
        value: ScoreValue,
    ) -> Result<(Score, i64)>;

    /// Number of stored scores with a value strictly greater than `value`.
    async fn count_scores_above(&self, value: i32) -> Result<i64>;

    async fn top_scores(&self, limit: i64) -> Result<Vec<LeaderboardRow>>;

    async fn scores_for_player(&self, player_id: i64) -> Result<Vec<Score>>;

    async fn top_score_for_player(&self, player_id: i64) -> Result<Option<i32>>;
}

pub type SharedStore = Arc<dyn LeaderboardStore>;
