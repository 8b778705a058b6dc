use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl Player {
    pub fn new(id: i64, name: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }
}
