use sqlx::{PgExecutor, PgPool};

use crate::error::{Result, StorageError};
use crate::models::{Score, ScoreValue};

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a score and count the strictly greater scores in the same transaction.
    pub async fn create_counting_above(
        &self,
        player_id: i64,
        value: ScoreValue,
    ) -> Result<(Score, i64)> {
        let mut tx = self.pool.begin().await?;

        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (player_id, score)
            VALUES ($1, $2)
            RETURNING id, player_id, score, created_at
            "#,
        )
        .bind(player_id)
        .bind(value.get())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match StorageError::from(e) {
            StorageError::ReferentialIntegrity(_) => {
                StorageError::ReferentialIntegrity(format!("Player {} does not exist", player_id))
            }
            other => other,
        })?;

        let greater = Self::count_above(&mut *tx, score.value).await?;

        tx.commit().await?;

        Ok((score, greater))
    }

    pub async fn count_scores_above(&self, value: i32) -> Result<i64> {
        Self::count_above(self.pool, value).await
    }

    async fn count_above<'e, E>(executor: E, value: i32) -> Result<i64>
    where
        E: PgExecutor<'e>,
    {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM scores
            WHERE score > $1
            "#,
        )
        .bind(value)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// All scores of a player, best first
    pub async fn list_for_player(&self, player_id: i64) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT id, player_id, score, created_at
            FROM scores
            WHERE player_id = $1
            ORDER BY score DESC, id ASC
            "#,
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    pub async fn top_for_player(&self, player_id: i64) -> Result<Option<i32>> {
        let top = sqlx::query_scalar::<_, Option<i32>>(
            r#"
            SELECT MAX(score)
            FROM scores
            WHERE player_id = $1
            "#,
        )
        .bind(player_id)
        .fetch_one(self.pool)
        .await?;

        Ok(top)
    }
}
