use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;
use crate::models::{LeaderboardRow, Player, PlayerName, Score, ScoreValue};
use crate::repository::{
    leaderboard::LeaderboardRepository, player::PlayerRepository, score::ScoreRepository,
};
use crate::store::LeaderboardStore;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Postgres-backed store. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl LeaderboardStore for Database {
    async fn find_player_by_id(&self, id: i64) -> Result<Option<Player>> {
        PlayerRepository::new(&self.pool).find_by_id(id).await
    }

    async fn find_player_by_name(&self, name: &PlayerName) -> Result<Option<Player>> {
        PlayerRepository::new(&self.pool).find_by_name(name).await
    }

    async fn insert_player(&self, name: &PlayerName) -> Result<Player> {
        PlayerRepository::new(&self.pool).create(name).await
    }

    async fn insert_score_counting_above(
        &self,
        player_id: i64,
        value: ScoreValue,
    ) -> Result<(Score, i64)> {
        ScoreRepository::new(&self.pool)
            .create_counting_above(player_id, value)
            .await
    }

    async fn count_scores_above(&self, value: i32) -> Result<i64> {
        ScoreRepository::new(&self.pool)
            .count_scores_above(value)
            .await
    }

    async fn top_scores(&self, limit: i64) -> Result<Vec<LeaderboardRow>> {
        LeaderboardRepository::new(&self.pool).top_scores(limit).await
    }

    async fn scores_for_player(&self, player_id: i64) -> Result<Vec<Score>> {
        ScoreRepository::new(&self.pool)
            .list_for_player(player_id)
            .await
    }

    async fn top_score_for_player(&self, player_id: i64) -> Result<Option<i32>> {
        ScoreRepository::new(&self.pool)
            .top_for_player(player_id)
            .await
    }
}
