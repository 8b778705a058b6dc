use crate::error::{Result, StorageError};

pub const MAX_SCORE: i32 = 999_999;

/// A score value within `0..=MAX_SCORE`. Out-of-range input is rejected,
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreValue(i32);

impl ScoreValue {
    pub fn new(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(StorageError::Validation(
                "Score must be a non-negative number".to_string(),
            ));
        }
        if value > i64::from(MAX_SCORE) {
            return Err(StorageError::Validation(
                "Score value is too high".to_string(),
            ));
        }
        Ok(Self(value as i32))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}
