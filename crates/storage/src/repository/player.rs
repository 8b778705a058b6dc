use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Player, PlayerName};

pub struct PlayerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find player by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Player>> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, created_at
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(player)
    }

    /// Find player by exact (case-sensitive) name
    pub async fn find_by_name(&self, name: &PlayerName) -> Result<Option<Player>> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, created_at
            FROM players
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(player)
    }

    /// Create a new player
    pub async fn create(&self, name: &PlayerName) -> Result<Player> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match StorageError::from(e) {
            StorageError::ConstraintViolation(_) => {
                StorageError::ConstraintViolation("Player name already exists".to_string())
            }
            other => other,
        })?;

        Ok(player)
    }
}
