//! Gemini generateContent provider.
//!
//! One outbound call: POST the prompt-wrapped state summary to the
//! generateContent endpoint and extract the candidate text. Every transport,
//! status, and shape failure maps to a typed [`InsightError`]; a missing
//! credential is reported before any request is built.

use std::future::Future;
use std::time::Duration;

use serde_json::{json, Value};

use synapse_core::config::InsightConfig;
use synapse_core::errors::{InsightError, SynapseResult};
use synapse_core::models::InsightSummary;
use synapse_core::traits::IInsightProvider;

use super::prompt::InsightPromptBuilder;

const PROVIDER_NAME: &str = "gemini";

/// HTTP client for the Gemini generative API.
#[derive(Debug)]
pub struct GeminiProvider {
    config: InsightConfig,
    client: reqwest::Client,
    prompt_builder: InsightPromptBuilder,
}

impl GeminiProvider {
    pub fn new(config: InsightConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            prompt_builder: InsightPromptBuilder::new(),
        }
    }

    /// Provider with defaults and the credential pulled from the environment.
    pub fn from_env() -> Self {
        let mut config = InsightConfig::default();
        if let Ok(key) = std::env::var(synapse_core::config::API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        Self::new(config)
    }

    /// Replace the prompt builder.
    pub fn with_prompt_builder(mut self, builder: InsightPromptBuilder) -> Self {
        self.prompt_builder = builder;
        self
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Pull the joined candidate text out of a generateContent response.
    fn extract_text(body: &Value) -> Result<String, InsightError> {
        let parts = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| InsightError::MalformedResponse {
                reason: "no candidates[0].content.parts in response".to_string(),
            })?;

        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(InsightError::EmptyResponse);
        }
        Ok(text)
    }
}

impl IInsightProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn is_configured(&self) -> bool {
        self.config.has_credential()
    }

    fn generate(
        &self,
        summary: &InsightSummary,
    ) -> impl Future<Output = SynapseResult<String>> + Send {
        let request = json!({
            "contents": [{
                "parts": [{ "text": self.prompt_builder.build_user_prompt(summary) }]
            }],
            "systemInstruction": {
                "parts": [{ "text": self.prompt_builder.system_prompt() }]
            },
            "generationConfig": { "temperature": self.config.temperature },
        });

        async move {
            let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) else {
                return Err(InsightError::MissingCredential {
                    provider: PROVIDER_NAME.to_string(),
                }
                .into());
            };

            let response = self
                .client
                .post(self.endpoint_url())
                .header("x-goog-api-key", key)
                .timeout(Duration::from_secs(self.config.request_timeout_secs))
                .json(&request)
                .send()
                .await
                .map_err(|e| InsightError::Network {
                    reason: e.to_string(),
                })?;

            let status = response.status();
            let body = response.text().await.map_err(|e| InsightError::Network {
                reason: e.to_string(),
            })?;

            if !status.is_success() {
                return Err(InsightError::Api {
                    status: status.as_u16(),
                    reason: truncate(&body, 200),
                }
                .into());
            }

            let parsed: Value =
                serde_json::from_str(&body).map_err(|e| InsightError::MalformedResponse {
                    reason: e.to_string(),
                })?;

            Ok(Self::extract_text(&parsed)?)
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
