use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Metric simulator configuration.
///
/// Jitter on each tick is `(u - bias) * scale` for uniform `u` in [0, 1),
/// clamped to the metric's bounds. The load bias sits slightly below 0.5
/// as observed, so the walk leans toward recovery between load events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Interval between simulator ticks (seconds).
    pub tick_interval_secs: u64,
    pub load_jitter_bias: f64,
    pub load_jitter_scale: f64,
    pub cpu_jitter_bias: f64,
    pub cpu_jitter_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: constants::DEFAULT_SIMULATION_TICK_SECS,
            load_jitter_bias: defaults::DEFAULT_LOAD_JITTER_BIAS,
            load_jitter_scale: defaults::DEFAULT_LOAD_JITTER_SCALE,
            cpu_jitter_bias: defaults::DEFAULT_CPU_JITTER_BIAS,
            cpu_jitter_scale: defaults::DEFAULT_CPU_JITTER_SCALE,
        }
    }
}
