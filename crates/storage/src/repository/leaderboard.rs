use sqlx::PgPool;

use crate::error::Result;
use crate::models::LeaderboardRow;

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Highest scores across all players. Rows come back ordered; ranks are
    /// assigned by the caller.
    pub async fn top_scores(&self, limit: i64) -> Result<Vec<LeaderboardRow>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT
                s.id AS score_id,
                p.name AS player_name,
                s.score,
                s.created_at
            FROM scores s
            INNER JOIN players p ON s.player_id = p.id
            ORDER BY s.score DESC, s.id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
