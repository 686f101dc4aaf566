use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Insight refresher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Interval between automatic refreshes (seconds). One refresh also
    /// fires at startup.
    pub refresh_interval_secs: u64,
    /// Generative-API credential. None means "not configured", which is a
    /// recognized state, not an error.
    pub api_key: Option<String>,
    /// Model identifier passed to the generateContent endpoint.
    pub model: String,
    /// Base URL of the generative API.
    pub endpoint: String,
    /// Sampling temperature for generation.
    pub temperature: f64,
    /// Per-request timeout (seconds).
    pub request_timeout_secs: u64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: constants::DEFAULT_INSIGHT_REFRESH_SECS,
            api_key: None,
            model: defaults::DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: defaults::DEFAULT_GEMINI_ENDPOINT.to_string(),
            temperature: defaults::DEFAULT_INSIGHT_TEMPERATURE,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl InsightConfig {
    /// Whether a non-empty credential is present.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
