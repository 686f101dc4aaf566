use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Functional area a feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    Analytics,
    Collaboration,
    Automation,
    TokenRails,
    Identity,
}

/// A throttleable product feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FeatureCategory,
    /// Relative contribution of this feature to user cognitive load, [0, 1].
    pub cognitive_weight: f64,
    /// Load level at which this feature becomes a throttle candidate.
    pub base_throttle_threshold: f64,
    pub is_active: bool,
    pub owner_team: String,
    pub last_updated: DateTime<Utc>,
}

/// Count the active features in a catalog slice.
pub fn active_count(features: &[FeatureDefinition]) -> usize {
    features.iter().filter(|f| f.is_active).count()
}
