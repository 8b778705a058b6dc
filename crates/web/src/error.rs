use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound => write!(f, "Endpoint not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ReferentialIntegrity(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(StorageError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Storage(StorageError::Validation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Player not found"
                })
            }
            Self::Storage(StorageError::ReferentialIntegrity(msg)) => {
                tracing::warn!("Referential integrity violation: {}", msg);
                json!({
                    "error": "Invalid player ID"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(StorageError::Unavailable(msg)) => {
                tracing::error!("Store unavailable: {}", msg);
                json!({
                    "error": "Database connection failed. Please try again later."
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An unexpected error occurred. Please try again later."
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::NotFound => {
                json!({
                    "error": "Endpoint not found"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;

/// Parses a player id path segment, rejecting anything but a positive integer.
pub fn parse_player_id(raw: &str) -> WebResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| WebError::BadRequest("Invalid player ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_per_error_kind() {
        let cases = [
            (
                WebError::Storage(StorageError::Validation("bad".into())),
                StatusCode::BAD_REQUEST,
            ),
            (WebError::Storage(StorageError::NotFound), StatusCode::NOT_FOUND),
            (
                WebError::Storage(StorageError::ReferentialIntegrity("fk".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                WebError::Storage(StorageError::ConstraintViolation("dup".into())),
                StatusCode::CONFLICT,
            ),
            (
                WebError::Storage(StorageError::Unavailable("down".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (WebError::NotFound, StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_parse_player_id() {
        assert_eq!(parse_player_id("42").unwrap(), 42);
        assert!(parse_player_id("0").is_err());
        assert!(parse_player_id("-7").is_err());
        assert!(parse_player_id("abc").is_err());
    }
}
