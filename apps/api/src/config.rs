use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-002";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// What to answer when the outbound call fails at the transport level
/// (connection refused, DNS, timeout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Answer 200 with the canned failure review.
    #[default]
    Fallback,
    /// Answer 500 "Analysis failed".
    Strict,
}

impl std::str::FromStr for FailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(FailurePolicy::Fallback),
            "strict" => Ok(FailurePolicy::Strict),
            other => bail!("unknown failure policy '{other}' (expected 'fallback' or 'strict')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Nothing is required: a missing API key switches the service into canned-review mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub gemini_timeout: Duration,
    pub gemini_json_mode: bool,
    pub failure_policy: FailurePolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_timeout = match var("GEMINI_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.trim()
                    .parse::<u64>()
                    .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let gemini_json_mode = match var("GEMINI_JSON_MODE") {
            Some(v) => parse_bool(&v).context("GEMINI_JSON_MODE must be true or false")?,
            None => true,
        };

        let failure_policy = match var("REVIEW_FAILURE_POLICY") {
            Some(v) => v
                .parse::<FailurePolicy>()
                .context("REVIEW_FAILURE_POLICY is invalid")?,
            None => FailurePolicy::default(),
        };

        Ok(Config {
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: var("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            gemini_timeout,
            gemini_json_mode,
            failure_policy,
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.gemini_timeout, Duration::from_secs(15));
        assert!(config.gemini_json_mode);
        assert_eq!(config.failure_policy, FailurePolicy::Fallback);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_API_BASE", "http://localhost:9000/v1beta/"),
            ("GEMINI_TIMEOUT_SECS", "3"),
            ("GEMINI_JSON_MODE", "off"),
            ("REVIEW_FAILURE_POLICY", "Strict"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.gemini_api_base, "http://localhost:9000/v1beta");
        assert_eq!(config.gemini_timeout, Duration::from_secs(3));
        assert!(!config.gemini_json_mode);
        assert_eq!(config.failure_policy, FailurePolicy::Strict);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("GEMINI_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config_from(&[("GEMINI_JSON_MODE", "maybe")]).is_err());
        assert!(config_from(&[("REVIEW_FAILURE_POLICY", "retry")]).is_err());
    }
}
