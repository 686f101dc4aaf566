//! Prompt templates for the generative-insight provider.

use synapse_core::models::InsightSummary;

/// Builder for insight analysis prompts.
#[derive(Debug, Clone)]
pub struct InsightPromptBuilder {
    system_prompt: String,
}

impl Default for InsightPromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightPromptBuilder {
    pub fn new() -> Self {
        Self {
            system_prompt: Self::default_system_prompt().to_string(),
        }
    }

    /// Set a custom system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// The system instruction sent alongside every request.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Build the user prompt carrying the serialized state summary.
    pub fn build_user_prompt(&self, summary: &InsightSummary) -> String {
        let state = serde_json::to_string_pretty(summary)
            .unwrap_or_else(|_| "{}".to_string());

        format!(
            "Analyze this system state and user cognitive metrics.\n\
             Provide 3 concise operational recommendations.\n\
             Focus on preventing burnout and optimizing payment rail throughput.\n\
             \n\
             System state:\n{state}"
        )
    }

    const fn default_system_prompt() -> &'static str {
        "You are a world-class systems orchestration engineer specializing in \
         fintech and cognitive UI/UX."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_summary() -> InsightSummary {
        InsightSummary {
            cognitive_load: 0.42,
            cpu: 61.0,
            active_features: 5,
            throttling_active: false,
        }
    }

    #[test]
    fn user_prompt_embeds_the_summary_fields() {
        let builder = InsightPromptBuilder::new();
        let prompt = builder.build_user_prompt(&make_summary());

        assert!(prompt.contains("cognitive_load"));
        assert!(prompt.contains("0.42"));
        assert!(prompt.contains("active_features"));
        assert!(prompt.contains("operational recommendations"));
    }

    #[test]
    fn custom_system_prompt_replaces_the_default() {
        let builder = InsightPromptBuilder::new().with_system_prompt("terse analyst");
        assert_eq!(builder.system_prompt(), "terse analyst");
    }
}
