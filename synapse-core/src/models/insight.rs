use serde::{Deserialize, Serialize};

/// Ephemeral request payload forwarded to the generative-insight collaborator.
///
/// Built fresh on each refresh from the current dashboard state; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Current simulated cognitive load.
    pub cognitive_load: f64,
    /// Current simulated CPU utilization percent.
    pub cpu: f64,
    /// Number of currently active features.
    pub active_features: usize,
    /// Analytic throttle signal (0.80 threshold), not the display hint.
    pub throttling_active: bool,
}
