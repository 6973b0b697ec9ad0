use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::{ErrorResponse, codes};
use thiserror::Error;
use uuid::Uuid;

/// Machine-readable code for a missing user.
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";

/// Machine-readable code for an email collision.
pub const DUPLICATE_EMAIL: &str = "DUPLICATE_EMAIL";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                USER_NOT_FOUND,
                format!("User {} not found", id),
            ),
            UserError::DuplicateEmail(email) => (
                StatusCode::CONFLICT,
                DUPLICATE_EMAIL,
                format!("User with email '{}' already exists", email),
            ),
            UserError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, codes::VALIDATION_ERROR, msg.clone())
            }
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    codes::INTERNAL_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message, code))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let resp = UserError::NotFound(Uuid::nil()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = UserError::DuplicateEmail("a@x.com".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = UserError::Validation("name must not be empty".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = UserError::Internal("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
