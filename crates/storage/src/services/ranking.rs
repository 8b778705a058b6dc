//! The two rank rules used by the leaderboard.
//!
//! A submitted score gets a *competition* rank: one more than the number of
//! strictly greater scores, so tied scores share a rank and the next distinct
//! score skips ahead. The leaderboard page uses a *positional* rank: the row's
//! 1-based index in the ordered result, so tied rows get consecutive ranks.

use crate::dto::leaderboard::LeaderboardEntry;
use crate::models::LeaderboardRow;

/// Competition rank from the number of strictly greater scores.
pub fn competition_rank(strictly_greater: i64) -> i64 {
    strictly_greater + 1
}

/// Numbers already-ordered rows 1..=n by position.
pub fn assign_positional_ranks(rows: Vec<LeaderboardRow>) -> Vec<LeaderboardEntry> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| LeaderboardEntry {
            rank: index as i64 + 1,
            player_name: row.player_name,
            score: row.score,
            date: row.created_at,
        })
        .collect()
}
