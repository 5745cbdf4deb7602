use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Minimum resume length, in characters.
pub const MIN_TEXT_CHARS: usize = 200;
pub const DEFAULT_LANGUAGE: &str = "en";

/// A validated review request. Lives for the duration of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    pub text: String,
    /// Target role; empty when the caller didn't name one.
    pub job: String,
    pub language: String,
}

impl ReviewRequest {
    /// Parses and validates a request body.
    ///
    /// Fields are read one at a time: malformed JSON counts as an empty payload,
    /// and a non-string value only resets its own field. A missing `text`
    /// therefore surfaces as a 422 rather than a body-parse error.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let field = |name: &str| payload.get(name).and_then(Value::as_str);

        let text = field("text").unwrap_or_default();
        if text.chars().count() < MIN_TEXT_CHARS {
            return Err(AppError::UnprocessableEntity(format!(
                "Text is too short (min {MIN_TEXT_CHARS} chars)"
            )));
        }

        Ok(Self {
            text: text.to_string(),
            job: field("job").unwrap_or_default().to_string(),
            language: field("language").unwrap_or(DEFAULT_LANGUAGE).to_string(),
        })
    }
}

/// Score and feedback for one resume section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub key: String,
    pub score: f64,
    pub feedback: String,
}

/// The evaluation returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub overall_score: f64,
    pub sections: Vec<SectionScore>,
    pub bullets_rewrite: Vec<String>,
    pub checklist: Vec<String>,
}

/// Body of a 200 response: the model's object forwarded as-is, or a canned review.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReviewResponse {
    Model(Value),
    Canned(ReviewResult),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resume(len: usize) -> String {
        "a".repeat(len)
    }

    #[test]
    fn test_defaults_applied() {
        let body = json!({ "text": resume(200) }).to_string();
        let request = ReviewRequest::from_body(body.as_bytes()).unwrap();
        assert_eq!(request.job, "");
        assert_eq!(request.language, "en");
    }

    #[test]
    fn test_null_optionals_take_defaults() {
        let body = json!({ "text": resume(250), "job": null, "language": null }).to_string();
        let request = ReviewRequest::from_body(body.as_bytes()).unwrap();
        assert_eq!(request.job, "");
        assert_eq!(request.language, "en");
    }

    #[test]
    fn test_fields_are_kept() {
        let body =
            json!({ "text": resume(300), "job": "Backend Engineer", "language": "pt" }).to_string();
        let request = ReviewRequest::from_body(body.as_bytes()).unwrap();
        assert_eq!(request.text.len(), 300);
        assert_eq!(request.job, "Backend Engineer");
        assert_eq!(request.language, "pt");
    }

    #[test]
    fn test_non_string_optionals_reset_only_that_field() {
        let body = json!({ "text": resume(300), "job": 5, "language": ["de"] }).to_string();
        let request = ReviewRequest::from_body(body.as_bytes()).unwrap();
        assert_eq!(request.text.len(), 300);
        assert_eq!(request.job, "");
        assert_eq!(request.language, "en");
    }

    #[test]
    fn test_empty_language_is_kept() {
        let body = json!({ "text": resume(200), "language": "" }).to_string();
        let request = ReviewRequest::from_body(body.as_bytes()).unwrap();
        assert_eq!(request.language, "");
    }

    #[test]
    fn test_short_text_rejected() {
        let body = json!({ "text": resume(199) }).to_string();
        let err = ReviewRequest::from_body(body.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(msg) if msg == "Text is too short (min 200 chars)"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 150 two-byte characters: 300 bytes but only 150 chars.
        let body = json!({ "text": "é".repeat(150) }).to_string();
        assert!(ReviewRequest::from_body(body.as_bytes()).is_err());

        let body = json!({ "text": "é".repeat(200) }).to_string();
        assert!(ReviewRequest::from_body(body.as_bytes()).is_ok());
    }

    #[test]
    fn test_missing_or_malformed_body_rejected() {
        assert!(ReviewRequest::from_body(b"").is_err());
        assert!(ReviewRequest::from_body(b"{not json").is_err());
        assert!(ReviewRequest::from_body(b"{}").is_err());
        assert!(ReviewRequest::from_body(b"[\"text\"]").is_err());
        assert!(ReviewRequest::from_body(json!({ "text": 12345 }).to_string().as_bytes()).is_err());
    }

    #[test]
    fn test_review_result_uses_camel_case() {
        let result = ReviewResult {
            overall_score: 7.5,
            sections: vec![SectionScore {
                key: "skills".to_string(),
                score: 6.0,
                feedback: "Group by relevance.".to_string(),
            }],
            bullets_rewrite: vec!["Cut costs by 10%".to_string()],
            checklist: vec![],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["overallScore"], 7.5);
        assert_eq!(value["bulletsRewrite"][0], "Cut costs by 10%");
        assert_eq!(value["sections"][0]["key"], "skills");
        assert!(value.get("overall_score").is_none());
    }

    #[test]
    fn test_review_response_is_untagged() {
        let forwarded = ReviewResponse::Model(json!({"overallScore": 9, "extra": true}));
        assert_eq!(
            serde_json::to_value(&forwarded).unwrap(),
            json!({"overallScore": 9, "extra": true})
        );
    }
}
