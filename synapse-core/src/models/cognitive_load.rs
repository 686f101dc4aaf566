use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{COGNITIVE_LOAD_CEILING, COGNITIVE_LOAD_FLOOR};

/// Simulated user mental-workload measure, clamped to [0.10, 0.98].
/// Mutated only by the metric simulator; read by the throttle evaluator
/// and the insight refresher.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct CognitiveLoad(f64);

impl CognitiveLoad {
    /// Lowest representable load.
    pub const FLOOR: f64 = COGNITIVE_LOAD_FLOOR;
    /// Highest representable load.
    pub const CEILING: f64 = COGNITIVE_LOAD_CEILING;

    /// Create a new CognitiveLoad, clamping to [FLOOR, CEILING].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::FLOOR, Self::CEILING))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for CognitiveLoad {
    fn default() -> Self {
        // Observed startup value of the simulation.
        Self(0.42)
    }
}

impl fmt::Display for CognitiveLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for CognitiveLoad {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<CognitiveLoad> for f64 {
    fn from(load: CognitiveLoad) -> Self {
        load.0
    }
}
