//! Insight payload construction.

use synapse_core::models::{feature, CognitiveLoad, FeatureDefinition, InsightSummary};
use synapse_core::throttle;

/// Snapshot the current derived state into a request payload.
///
/// The throttling flag uses the analytic 0.80 threshold, not the display
/// hint; the payload is a diagnostic for the generative collaborator.
pub fn build_summary(
    load: CognitiveLoad,
    cpu_usage: f64,
    features: &[FeatureDefinition],
) -> InsightSummary {
    InsightSummary {
        cognitive_load: load.value(),
        cpu: cpu_usage,
        active_features: feature::active_count(features),
        throttling_active: throttle::analytic_signal(load),
    }
}
