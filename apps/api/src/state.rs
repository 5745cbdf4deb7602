use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; reviews then use the canned result.
    pub llm: Option<Arc<dyn GenerativeModel>>,
    pub config: Config,
}
