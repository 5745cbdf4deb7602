//! Canned reviews returned when the model can't be consulted.

use crate::review::models::{ReviewResult, SectionScore};

fn section(key: &str, score: f64, feedback: &str) -> SectionScore {
    SectionScore {
        key: key.to_string(),
        score,
        feedback: feedback.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returned when no API key is configured.
pub fn unconfigured_review() -> ReviewResult {
    ReviewResult {
        overall_score: 7.4,
        sections: vec![
            section("summary", 7.0, "Good summary; add measurable outcomes."),
            section("experience", 8.0, "Clear results; standardize action verbs."),
            section("skills", 6.0, "Highlight skills relevant to the target role."),
            section("education", 8.0, "Looks good."),
        ],
        bullets_rewrite: strings(&[
            "Led a project that reduced setup time by 35%…",
            "Implemented CI that lowered deployment failures by 22%…",
        ]),
        checklist: strings(&[
            "Add metrics to each bullet.",
            "Reduce verb repetition.",
            "Order skills by job relevance.",
        ]),
    }
}

/// Returned when the model call fails at the transport level under the fallback policy.
pub fn unavailable_review() -> ReviewResult {
    ReviewResult {
        overall_score: 7.0,
        sections: vec![
            section("summary", 7.0, "Keep it concise; add measurable outcomes."),
            section("experience", 7.0, "Quantify impact (%, $, time saved)."),
            section("skills", 6.0, "Prioritize role-relevant tools."),
            section("education", 8.0, "Looks consistent."),
        ],
        bullets_rewrite: strings(&[
            "Optimized pipeline reducing build time by 28%…",
            "Automated QA checks cutting regressions by 18%…",
        ]),
        checklist: strings(&[
            "Add at least one metric per bullet.",
            "Standardize verb tense.",
            "Group skills by category and relevance.",
        ]),
    }
}
