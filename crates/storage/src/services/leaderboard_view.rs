use crate::dto::leaderboard::{LeaderboardEntry, validate_limit};
use crate::error::{Result, StorageError};
use crate::models::{Player, Score};
use crate::services::player_registry;
use crate::services::ranking::assign_positional_ranks;
use crate::store::LeaderboardStore;

/// A player's full score history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHistory {
    pub player: Player,
    /// Best score, 0 when the player has none.
    pub top_score: i32,
    /// Best first.
    pub scores: Vec<Score>,
}

/// The `limit` best scores across all players, ranked by position.
pub async fn top_n(store: &dyn LeaderboardStore, limit: i64) -> Result<Vec<LeaderboardEntry>> {
    validate_limit(limit).map_err(StorageError::Validation)?;

    let rows = store.top_scores(limit).await?;

    Ok(assign_positional_ranks(rows))
}

pub async fn player_history(store: &dyn LeaderboardStore, player_id: i64) -> Result<PlayerHistory> {
    let player = player_registry::get_by_id(store, player_id).await?;

    let scores = store.scores_for_player(player.id).await?;
    let top_score = store
        .top_score_for_player(player.id)
        .await?
        .unwrap_or(0);

    Ok(PlayerHistory {
        player,
        top_score,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{PlayerName, ScoreValue};
    use crate::services::score_ledger;

    async fn seeded(values: &[(&str, i64)]) -> MemoryStore {
        let store = MemoryStore::new();
        for (name, value) in values {
            let name = PlayerName::parse(name).unwrap();
            let player = player_registry::register_or_get(&store, &name)
                .await
                .unwrap()
                .into_player();
            score_ledger::submit(&store, player.id, ScoreValue::new(*value).unwrap())
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_top_n_uses_positional_ranks() {
        let store = seeded(&[("a", 10), ("b", 90), ("c", 90), ("d", 50)]).await;

        let top = top_n(&store, 3).await.unwrap();

        let scores: Vec<i32> = top.iter().map(|e| e.score).collect();
        let ranks: Vec<i64> = top.iter().map(|e| e.rank).collect();
        let names: Vec<&str> = top.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(scores, [90, 90, 50]);
        assert_eq!(ranks, [1, 2, 3]);
        assert_eq!(names, ["b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_positional_and_competition_ranks_differ_on_ties() {
        let store = seeded(&[("a", 90), ("b", 90)]).await;

        let top = top_n(&store, 2).await.unwrap();
        let second_value = ScoreValue::new(i64::from(top[1].score)).unwrap();

        assert_eq!(top[1].rank, 2);
        assert_eq!(score_ledger::rank_of(&store, second_value).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_top_n_limit_bounds() {
        let store = seeded(&[("a", 1)]).await;

        for limit in [0, 101] {
            assert!(matches!(
                top_n(&store, limit).await,
                Err(StorageError::Validation(_))
            ));
        }
        assert_eq!(top_n(&store, 1).await.unwrap().len(), 1);
        assert_eq!(top_n(&store, 100).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_top_n_on_empty_ledger() {
        let store = MemoryStore::new();
        assert!(top_n(&store, 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_player_history_is_best_first() {
        let store = seeded(&[("solo", 20), ("solo", 70), ("solo", 45), ("other", 99)]).await;
        let solo = store
            .find_player_by_name(&PlayerName::parse("solo").unwrap())
            .await
            .unwrap()
            .unwrap();

        let history = player_history(&store, solo.id).await.unwrap();

        let values: Vec<i32> = history.scores.iter().map(|s| s.value).collect();
        assert_eq!(values, [70, 45, 20]);
        assert_eq!(history.top_score, 70);
        assert_eq!(history.player, solo);
    }

    #[tokio::test]
    async fn test_player_without_scores_has_zero_top_score() {
        let store = MemoryStore::new();
        let player = player_registry::register_or_get(&store, &PlayerName::parse("new").unwrap())
            .await
            .unwrap()
            .into_player();

        let history = player_history(&store, player.id).await.unwrap();

        assert_eq!(history.top_score, 0);
        assert!(history.scores.is_empty());
    }

    #[tokio::test]
    async fn test_player_history_for_unknown_player() {
        let store = MemoryStore::new();
        assert!(matches!(
            player_history(&store, 12).await,
            Err(StorageError::NotFound)
        ));
    }
}
