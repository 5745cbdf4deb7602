//! Axum route handlers for the Review API.

use axum::{body::Bytes, extract::State, Json};

use crate::errors::AppError;
use crate::review::models::{ReviewRequest, ReviewResponse};
use crate::review::service::run_review;
use crate::state::AppState;

/// POST /api/review
///
/// Body: `{text, job?, language?}`. The body is read raw so that a missing or
/// malformed payload is reported as a short-text 422 rather than a 400.
pub async fn handle_review(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReviewResponse>, AppError> {
    let request = ReviewRequest::from_body(&body)?;

    let response = run_review(
        &request,
        state.llm.as_deref(),
        state.config.failure_policy,
    )
    .await?;

    Ok(Json(response))
}

/// Any non-POST method on /api/review.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
