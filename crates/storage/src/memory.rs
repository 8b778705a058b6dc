use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::{Result, StorageError};
use crate::models::{LeaderboardRow, Player, PlayerName, Score, ScoreValue};
use crate::store::LeaderboardStore;

/// In-memory store with the same constraints as the Postgres schema.
///
/// Every operation runs under a single lock, so an insert and the count that
/// follows it observe the same state.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    players: BTreeMap<i64, Player>,
    /// Player ids keyed by exact name.
    names: HashMap<String, i64>,
    scores: Vec<Score>,
    /// Positions in `scores` per value, ordered by value. Positions within a
    /// value are in insertion order, which is also id order.
    value_index: BTreeMap<i32, Vec<usize>>,
    last_player_id: i64,
    last_score_id: i64,
}

impl Inner {
    fn count_above(&self, value: i32) -> i64 {
        self.value_index
            .range((Bound::Excluded(value), Bound::Unbounded))
            .map(|(_, positions)| positions.len() as i64)
            .sum()
    }

    /// Scores best first, ties by id, without sorting the ledger.
    fn ranked(&self) -> impl Iterator<Item = &Score> {
        self.value_index
            .values()
            .rev()
            .flatten()
            .filter_map(|position| self.scores.get(*position))
    }
}

fn best_first<'a>(scores: impl Iterator<Item = &'a Score>) -> Vec<Score> {
    let mut sorted: Vec<Score> = scores.cloned().collect();
    sorted.sort_by_key(|s| (Reverse(s.value), s.id));
    sorted
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    pub async fn player_count(&self) -> usize {
        self.inner.lock().await.players.len()
    }

    pub async fn score_count(&self) -> usize {
        self.inner.lock().await.scores.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LeaderboardStore for MemoryStore {
    async fn find_player_by_id(&self, id: i64) -> Result<Option<Player>> {
        let inner = self.inner.lock().await;
        Ok(inner.players.get(&id).cloned())
    }

    async fn find_player_by_name(&self, name: &PlayerName) -> Result<Option<Player>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .names
            .get(name.as_str())
            .and_then(|id| inner.players.get(id))
            .cloned())
    }

    async fn insert_player(&self, name: &PlayerName) -> Result<Player> {
        let mut inner = self.inner.lock().await;

        if inner.names.contains_key(name.as_str()) {
            return Err(StorageError::ConstraintViolation(
                "Player name already exists".to_string(),
            ));
        }

        inner.last_player_id += 1;
        let player = Player::new(inner.last_player_id, name.as_str(), Utc::now().naive_utc());

        inner.names.insert(player.name.clone(), player.id);
        inner.players.insert(player.id, player.clone());

        Ok(player)
    }

    async fn insert_score_counting_above(
        &self,
        player_id: i64,
        value: ScoreValue,
    ) -> Result<(Score, i64)> {
        let mut inner = self.inner.lock().await;

        if !inner.players.contains_key(&player_id) {
            return Err(StorageError::ReferentialIntegrity(format!(
                "Player {} does not exist",
                player_id
            )));
        }

        inner.last_score_id += 1;
        let score = Score::new(
            inner.last_score_id,
            player_id,
            value.get(),
            Utc::now().naive_utc(),
        );

        let position = inner.scores.len();
        inner.scores.push(score.clone());
        inner.value_index.entry(score.value).or_default().push(position);

        let greater = inner.count_above(score.value);

        Ok((score, greater))
    }

    async fn count_scores_above(&self, value: i32) -> Result<i64> {
        let inner = self.inner.lock().await;
        Ok(inner.count_above(value))
    }

    async fn top_scores(&self, limit: i64) -> Result<Vec<LeaderboardRow>> {
        let inner = self.inner.lock().await;
        let limit = usize::try_from(limit).unwrap_or(0);

        let rows = inner
            .ranked()
            .take(limit)
            .filter_map(|score| {
                inner.players.get(&score.player_id).map(|player| LeaderboardRow {
                    score_id: score.id,
                    player_name: player.name.clone(),
                    score: score.value,
                    created_at: score.created_at,
                })
            })
            .collect();

        Ok(rows)
    }

    async fn scores_for_player(&self, player_id: i64) -> Result<Vec<Score>> {
        let inner = self.inner.lock().await;
        Ok(best_first(
            inner.scores.iter().filter(|s| s.player_id == player_id),
        ))
    }

    async fn top_score_for_player(&self, player_id: i64) -> Result<Option<i32>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .scores
            .iter()
            .filter(|s| s.player_id == player_id)
            .map(|s| s.value)
            .max())
    }
}
