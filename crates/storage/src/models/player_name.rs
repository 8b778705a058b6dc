use crate::error::{Result, StorageError};

pub const MAX_PLAYER_NAME_LENGTH: usize = 50;

/// A player name that has been trimmed and checked against the allowed
/// length and character set.
///
/// The registry only accepts this type, so every name that reaches the
/// store is already in its canonical stored form.
///
/// # Examples
///
/// ```
/// use storage::models::PlayerName;
///
/// let name = PlayerName::parse("  Ada_99  ").unwrap();
/// assert_eq!(name.as_str(), "Ada_99");
///
/// assert!(PlayerName::parse("   ").is_err());
/// assert!(PlayerName::parse("no/slashes").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(StorageError::Validation(
                "Player name cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(StorageError::Validation(format!(
                "Player name must be {} characters or less",
                MAX_PLAYER_NAME_LENGTH
            )));
        }

        if !trimmed.chars().all(is_allowed_char) {
            return Err(StorageError::Validation(
                "Player name can only contain letters, numbers, spaces, hyphens, underscores, and periods"
                    .to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let name = PlayerName::parse("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_accepts_allowed_punctuation() {
        assert!(PlayerName::parse("J. Doe-Smith_2").is_ok());
    }

    #[test]
    fn test_rejects_empty_after_trim() {
        let err = PlayerName::parse(" \t ").unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_length_limit_counts_trimmed_characters() {
        let fifty = "a".repeat(MAX_PLAYER_NAME_LENGTH);
        assert!(PlayerName::parse(&format!("  {}  ", fifty)).is_ok());

        let fifty_one = "a".repeat(MAX_PLAYER_NAME_LENGTH + 1);
        assert!(PlayerName::parse(&fifty_one).is_err());
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        assert!(PlayerName::parse("robert'); DROP TABLE").is_err());
        assert!(PlayerName::parse("émile").is_err());
        assert!(PlayerName::parse("tab\tinside").is_err());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let lower = PlayerName::parse("alice").unwrap();
        let upper = PlayerName::parse("Alice").unwrap();
        assert_ne!(lower, upper);
    }
}
