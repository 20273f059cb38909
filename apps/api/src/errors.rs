use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request fields, or an unknown action.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::SessionNotFound(session_id) => {
                tracing::debug!("Unknown interview session: {session_id}");
                (
                    StatusCode::NOT_FOUND,
                    "SESSION_NOT_FOUND",
                    "Session not found".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let (status, body) = body_of(AppError::Validation("Invalid action".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid action");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_session_not_found_maps_to_404() {
        let (status, body) = body_of(AppError::SessionNotFound("abc".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Session not found");
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let err = AppError::Internal(anyhow::anyhow!("scores undefined for session abc"));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("report").is_none());
    }
}
