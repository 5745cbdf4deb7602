//! Review flow: (skip or call model) → extract → validate → respond.
//!
//! Input validation happens before this point; see `ReviewRequest::from_body`.

use tracing::{info, warn};

use crate::config::FailurePolicy;
use crate::errors::AppError;
use crate::llm_client::extract::extract_json_object;
use crate::llm_client::{GenerativeModel, LlmError};
use crate::review::fallback::{unavailable_review, unconfigured_review};
use crate::review::models::{ReviewRequest, ReviewResponse};
use crate::review::prompts::build_review_prompt;
use crate::review::schema::validate_review_shape;

pub const NON_JSON_MESSAGE: &str = "Model returned non-JSON";
pub const SCHEMA_MESSAGE: &str = "Model output did not match the review schema";

/// Runs one review. `llm` is `None` when no API key is configured.
pub async fn run_review(
    request: &ReviewRequest,
    llm: Option<&dyn GenerativeModel>,
    policy: FailurePolicy,
) -> Result<ReviewResponse, AppError> {
    let Some(llm) = llm else {
        info!("No API key configured, returning canned review");
        return Ok(ReviewResponse::Canned(unconfigured_review()));
    };

    let prompt = build_review_prompt(request);

    let text = match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) if e.is_transport() => {
            return match policy {
                FailurePolicy::Fallback => {
                    warn!(
                        "Model {} unreachable ({e}), returning fallback review",
                        llm.model()
                    );
                    Ok(ReviewResponse::Canned(unavailable_review()))
                }
                FailurePolicy::Strict => Err(AppError::AnalysisFailed(e.to_string())),
            };
        }
        Err(LlmError::Api { status, message }) => {
            return Err(AppError::Upstream {
                message,
                cause: format!("model {} answered with status {status}", llm.model()),
            });
        }
        Err(e) => {
            return Err(AppError::Upstream {
                message: NON_JSON_MESSAGE.to_string(),
                cause: format!("model {} returned an unusable envelope: {e}", llm.model()),
            });
        }
    };

    let value = extract_json_object(&text).ok_or_else(|| AppError::Upstream {
        message: NON_JSON_MESSAGE.to_string(),
        cause: format!("no JSON object in {} chars of model output", text.len()),
    })?;

    validate_review_shape(&value).map_err(|e| AppError::Upstream {
        message: SCHEMA_MESSAGE.to_string(),
        cause: format!("schema check failed: {e}"),
    })?;

    Ok(ReviewResponse::Model(value))
}
