//! API error type and HTTP response mapping.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use quill_auth::AuthError;

/// Field name → list of human-readable messages, for 400 responses.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    Database(quill_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// Request body/query failed declarative validation.
    Validation(FieldErrors),
}

impl From<quill_core::Error> for ApiError {
    fn from(err: quill_core::Error) -> Self {
        match &err {
            quill_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            quill_core::Error::Conflict(msg) => ApiError::Conflict(msg.clone()),
            quill_core::Error::Unauthorized(msg) => ApiError::Unauthorized(msg.clone()),
            quill_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            quill_core::Error::Database(sqlx_err) => {
                let msg = sqlx_err.to_string();
                if msg.contains("UNIQUE constraint failed") {
                    // The only unique constraint in the schema is users.email;
                    // surface the same conflict message the service pre-check uses.
                    let friendly_msg = if msg.contains("users.email") {
                        "User with this email already exists".to_string()
                    } else {
                        msg
                    };
                    return ApiError::Conflict(friendly_msg);
                }
                ApiError::Database(err)
            }
            _ => ApiError::Database(err),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // Token rejections stay uniform; no cause detail leaks.
            AuthError::InvalidToken => ApiError::Unauthorized("Unauthorized".to_string()),
            other => ApiError::Database(quill_core::Error::Internal(other.to_string())),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, errors) = match self {
            ApiError::Database(err) => {
                tracing::error!(subsystem = "api", error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(errors),
            ),
        };

        let mut body = serde_json::json!({
            "statusCode": status.as_u16(),
            "message": message,
        });
        if let Some(errors) = errors {
            body["errors"] = serde_json::to_value(errors).unwrap_or_default();
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = quill_core::Error::NotFound("Note not found".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err: ApiError = quill_core::Error::Conflict("exists".to_string()).into();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_invalid_token_maps_to_uniform_unauthorized() {
        let err: ApiError = AuthError::InvalidToken.into();
        match err {
            ApiError::Unauthorized(msg) => assert_eq!(msg, "Unauthorized"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }
}
