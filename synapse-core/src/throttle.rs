//! Load-derived throttling decisions.
//!
//! Two strict thresholds are in play for two consumers: 0.75 drives the
//! user-facing posture message, 0.80 is the diagnostic flag carried in
//! insight payloads. They are intentionally separate constants.

use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_THROTTLE_THRESHOLD, INSIGHT_THROTTLE_THRESHOLD};
use crate::models::CognitiveLoad;

/// User-facing posture derived from the current load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPosture {
    /// Load is tolerable; the balancer only watches.
    PassiveObservation,
    /// Load crossed the display threshold; complex tasks are suppressed.
    ThrottlingComplexTasks,
}

/// Throttle hint for user-facing messaging (strict `> 0.75`).
pub fn display_hint(load: CognitiveLoad) -> bool {
    load.value() > DISPLAY_THROTTLE_THRESHOLD
}

/// Throttle signal embedded in insight payloads (strict `> 0.80`).
pub fn analytic_signal(load: CognitiveLoad) -> bool {
    load.value() > INSIGHT_THROTTLE_THRESHOLD
}

/// Map the current load to its display posture.
pub fn posture(load: CognitiveLoad) -> LoadPosture {
    if display_hint(load) {
        LoadPosture::ThrottlingComplexTasks
    } else {
        LoadPosture::PassiveObservation
    }
}
