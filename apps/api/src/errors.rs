use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}` and is logged exactly once, here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// The generative API answered, but with an error status or unusable content.
    /// `message` goes to the caller, `cause` only to the log.
    #[error("Upstream error: {message} ({cause})")]
    Upstream { message: String, cause: String },

    /// The outbound call never produced an answer and the failure policy is strict.
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed => {
                tracing::warn!("Rejected request: method not allowed");
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            AppError::Upstream { message, cause } => {
                tracing::error!("Upstream error: {message} ({cause})");
                (StatusCode::BAD_GATEWAY, message.clone())
            }
            AppError::AnalysisFailed(msg) => {
                tracing::error!("Analysis failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Analysis failed".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::UnprocessableEntity("short".into())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Upstream {
                message: "bad".into(),
                cause: "status 500".into(),
            }
            .into_response()
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::AnalysisFailed("timeout".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_upstream_cause_is_not_sent_to_caller() {
        use http_body_util::BodyExt;

        let response = AppError::Upstream {
            message: "Model returned non-JSON".into(),
            cause: "no JSON object in 42 chars of output".into(),
        }
        .into_response();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Model returned non-JSON" }));
    }
}
