use crate::error::Result;
use crate::models::{RankedScore, ScoreValue};
use crate::services::player_registry::validate_player_id;
use crate::services::ranking::competition_rank;
use crate::store::LeaderboardStore;

/// Records a score and returns it with its competition rank.
///
/// The rank is counted against the table state right after the insert, so
/// it is a snapshot and is never updated afterwards.
pub async fn submit(
    store: &dyn LeaderboardStore,
    player_id: i64,
    value: ScoreValue,
) -> Result<RankedScore> {
    validate_player_id(player_id)?;

    let (score, strictly_greater) = store.insert_score_counting_above(player_id, value).await?;
    let rank = competition_rank(strictly_greater);

    tracing::info!(
        score_id = score.id,
        player_id,
        score = score.value,
        rank,
        "Recorded score"
    );

    Ok(RankedScore { score, rank })
}

/// Number of stored scores strictly greater than `value`.
pub async fn count_above(store: &dyn LeaderboardStore, value: ScoreValue) -> Result<i64> {
    store.count_scores_above(value.get()).await
}

/// Rank a score of `value` would get if submitted now.
pub async fn rank_of(store: &dyn LeaderboardStore, value: ScoreValue) -> Result<i64> {
    Ok(competition_rank(count_above(store, value).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::memory::MemoryStore;
    use crate::models::{Player, PlayerName};

    async fn player(store: &MemoryStore, name: &str) -> Player {
        store
            .insert_player(&PlayerName::parse(name).unwrap())
            .await
            .unwrap()
    }

    async fn submit_value(store: &MemoryStore, player_id: i64, value: i64) -> RankedScore {
        submit(store, player_id, ScoreValue::new(value).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_ties_share_rank() {
        let store = MemoryStore::new();
        let p = player(&store, "p1").await;

        let mut ranks = Vec::new();
        for v in [50, 80, 80, 30] {
            ranks.push(submit_value(&store, p.id, v).await.rank);
        }
        assert_eq!(ranks, [1, 1, 1, 4]);

        let third_eighty = submit_value(&store, p.id, 80).await;
        assert_eq!(third_eighty.rank, 1);
        assert_eq!(third_eighty.score.value, 80);
        assert_eq!(third_eighty.score.player_id, p.id);
    }

    #[tokio::test]
    async fn test_new_best_pushes_previous_scores_down() {
        let store = MemoryStore::new();
        let p = player(&store, "p1").await;
        for v in [50, 80, 80, 30, 80] {
            submit_value(&store, p.id, v).await;
        }

        let ninety = submit_value(&store, p.id, 90).await;
        assert_eq!(ninety.rank, 1);

        let eighty = ScoreValue::new(80).unwrap();
        assert_eq!(rank_of(&store, eighty).await.unwrap(), 2);
        assert_eq!(count_above(&store, eighty).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rank_counts_scores_of_all_players() {
        let store = MemoryStore::new();
        let a = player(&store, "a").await;
        let b = player(&store, "b").await;
        submit_value(&store, a.id, 500).await;
        submit_value(&store, b.id, 700).await;

        assert_eq!(submit_value(&store, b.id, 100).await.rank, 3);
        assert_eq!(submit_value(&store, a.id, 600).await.rank, 2);
    }

    #[tokio::test]
    async fn test_unknown_player_creates_no_score() {
        let store = MemoryStore::new();

        let err = submit(&store, 77, ScoreValue::new(10).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::ReferentialIntegrity(_)));
        assert_eq!(store.score_count().await, 0);
    }

    #[tokio::test]
    async fn test_non_positive_player_id_is_validation_error() {
        let store = MemoryStore::new();

        let err = submit(&store, 0, ScoreValue::new(10).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[tokio::test]
    async fn test_max_score_is_accepted() {
        let store = MemoryStore::new();
        let p = player(&store, "max").await;

        let ranked = submit_value(&store, p.id, 999_999).await;
        assert_eq!(ranked.score.value, 999_999);
        assert_eq!(ranked.rank, 1);
    }
}
