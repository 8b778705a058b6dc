use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StorageError::ConstraintViolation(_))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, StorageError::ReferentialIntegrity(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => StorageError::NotFound,
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|code| code.into_owned());
                match code.as_deref() {
                    Some(UNIQUE_VIOLATION) => {
                        StorageError::ConstraintViolation(db_err.message().to_string())
                    }
                    Some(FOREIGN_KEY_VIOLATION) => {
                        StorageError::ReferentialIntegrity(db_err.message().to_string())
                    }
                    _ => StorageError::Database(sqlx::Error::Database(db_err)),
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StorageError::Unavailable(error.to_string()),
            other => StorageError::Database(other),
        }
    }
}
