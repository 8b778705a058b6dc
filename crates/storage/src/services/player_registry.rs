use crate::error::{Result, StorageError};
use crate::models::{Player, PlayerName};
use crate::store::LeaderboardStore;

/// Outcome of [`register_or_get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created(Player),
    Existing(Player),
}

impl Registration {
    pub fn player(&self) -> &Player {
        match self {
            Self::Created(player) | Self::Existing(player) => player,
        }
    }

    pub fn into_player(self) -> Player {
        match self {
            Self::Created(player) | Self::Existing(player) => player,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Returns the player registered under `name`, creating it if needed.
///
/// If another caller inserts the same name between the lookup and the
/// insert, the store rejects the second insert and the winner is re-read.
pub async fn register_or_get(
    store: &dyn LeaderboardStore,
    name: &PlayerName,
) -> Result<Registration> {
    if let Some(existing) = store.find_player_by_name(name).await? {
        return Ok(Registration::Existing(existing));
    }

    match store.insert_player(name).await {
        Ok(player) => {
            tracing::info!(player_id = player.id, name = %name, "Registered new player");
            Ok(Registration::Created(player))
        }
        Err(err) if err.is_unique_violation() => {
            tracing::debug!(name = %name, "Player registered concurrently, re-reading");
            store
                .find_player_by_name(name)
                .await?
                .map(Registration::Existing)
                .ok_or(err)
        }
        Err(err) => Err(err),
    }
}

pub async fn get_by_id(store: &dyn LeaderboardStore, id: i64) -> Result<Player> {
    validate_player_id(id)?;

    store
        .find_player_by_id(id)
        .await?
        .ok_or(StorageError::NotFound)
}

pub fn validate_player_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(StorageError::Validation("Invalid player ID".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{LeaderboardRow, Score, ScoreValue};

    fn name(raw: &str) -> PlayerName {
        PlayerName::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_registration_is_idempotent() {
        let store = MemoryStore::new();

        let first = register_or_get(&store, &name("alice")).await.unwrap();
        let second = register_or_get(&store, &name("alice")).await.unwrap();

        assert!(first.is_created());
        assert!(!second.is_created());
        assert_eq!(first.player().id, second.player().id);
        assert_eq!(second.into_player().name, "alice");
        assert_eq!(store.player_count().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_registration_creates_one_player() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { register_or_get(store.as_ref(), &name("racer")).await })
            })
            .collect();

        let mut ids = Vec::new();
        let mut created = 0;
        for handle in handles {
            let registration = handle.await.unwrap().unwrap();
            if registration.is_created() {
                created += 1;
            }
            ids.push(registration.player().id);
        }

        assert_eq!(created, 1);
        assert!(ids.iter().all(|id| *id == ids[0]));
        assert_eq!(store.player_count().await, 1);
    }

    /// Lets another caller register the name right after the first lookup misses.
    struct LosingRaceStore {
        inner: MemoryStore,
        raced: AtomicBool,
    }

    #[async_trait::async_trait]
    impl LeaderboardStore for LosingRaceStore {
        async fn find_player_by_id(&self, id: i64) -> Result<Option<Player>> {
            self.inner.find_player_by_id(id).await
        }

        async fn find_player_by_name(&self, name: &PlayerName) -> Result<Option<Player>> {
            if !self.raced.swap(true, Ordering::SeqCst) {
                self.inner.insert_player(name).await?;
                return Ok(None);
            }
            self.inner.find_player_by_name(name).await
        }

        async fn insert_player(&self, name: &PlayerName) -> Result<Player> {
            self.inner.insert_player(name).await
        }

        async fn insert_score_counting_above(
            &self,
            player_id: i64,
            value: ScoreValue,
        ) -> Result<(Score, i64)> {
            self.inner
                .insert_score_counting_above(player_id, value)
                .await
        }

        async fn count_scores_above(&self, value: i32) -> Result<i64> {
            self.inner.count_scores_above(value).await
        }

        async fn top_scores(&self, limit: i64) -> Result<Vec<LeaderboardRow>> {
            self.inner.top_scores(limit).await
        }

        async fn scores_for_player(&self, player_id: i64) -> Result<Vec<Score>> {
            self.inner.scores_for_player(player_id).await
        }

        async fn top_score_for_player(&self, player_id: i64) -> Result<Option<i32>> {
            self.inner.top_score_for_player(player_id).await
        }
    }

    #[tokio::test]
    async fn test_lost_race_resolves_to_existing_player() {
        let store = LosingRaceStore {
            inner: MemoryStore::new(),
            raced: AtomicBool::new(false),
        };

        let registration = register_or_get(&store, &name("late")).await.unwrap();

        assert!(!registration.is_created());
        assert_eq!(registration.player().name, "late");
        assert_eq!(store.inner.player_count().await, 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = MemoryStore::new();
        let created = register_or_get(&store, &name("bob")).await.unwrap();

        let found = get_by_id(&store, created.player().id).await.unwrap();
        assert_eq!(&found, created.player());

        assert!(matches!(
            get_by_id(&store, 999).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_get_by_id_rejects_non_positive_ids() {
        let store = MemoryStore::new();

        for id in [0, -1] {
            assert!(matches!(
                get_by_id(&store, id).await,
                Err(StorageError::Validation(_))
            ));
        }
    }
}
