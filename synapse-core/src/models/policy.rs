use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a policy reacts when its activation window is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrottlingStrategy {
    DynamicAdaptive,
    HardCutoff,
    GradualDegrade,
}

/// Load window and timing bounds for a throttling policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub min_load: f64,
    pub max_load: f64,
    /// Seconds the load must stay inside the window before activation.
    pub duration_threshold_secs: u64,
    /// Seconds after deactivation before the policy may fire again.
    pub cooldown_secs: u64,
}

/// An adaptive throttling policy over one or more features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrottlingPolicy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub strategy: ThrottlingStrategy,
    pub target_feature_ids: Vec<String>,
    pub threshold_config: ThresholdConfig,
    pub priority: u8,
    pub is_active: bool,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}
