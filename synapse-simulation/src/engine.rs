use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use synapse_core::config::SimulationConfig;
use synapse_core::constants::{CPU_CEILING, CPU_FLOOR};
use synapse_core::models::{CognitiveLoad, SystemHealthSnapshot};

use crate::walk::BoundedWalk;

/// Advances the simulated metrics one tick at a time.
///
/// Owns its RNG so trajectories are reproducible under a fixed seed. A tick
/// is a pure transition from the previous values to the next ones; callers
/// own the state and decide where the results land.
#[derive(Debug)]
pub struct SimulationEngine {
    rng: StdRng,
    load_walk: BoundedWalk,
    cpu_walk: BoundedWalk,
}

impl SimulationEngine {
    /// Create an engine from simulator configuration, seeded from entropy.
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            load_walk: BoundedWalk::new(
                CognitiveLoad::FLOOR,
                CognitiveLoad::CEILING,
                config.load_jitter_bias,
                config.load_jitter_scale,
            ),
            cpu_walk: BoundedWalk::new(
                CPU_FLOOR,
                CPU_CEILING,
                config.cpu_jitter_bias,
                config.cpu_jitter_scale,
            ),
        }
    }

    /// Set the RNG seed for reproducible trajectories (testing).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Advance one tick: jitter the load and the CPU gauge, refresh the
    /// snapshot timestamp, hold every other gauge.
    pub fn tick(
        &mut self,
        load: CognitiveLoad,
        health: &SystemHealthSnapshot,
        now: DateTime<Utc>,
    ) -> (CognitiveLoad, SystemHealthSnapshot) {
        let next_load = CognitiveLoad::new(self.load_walk.step(&mut self.rng, load.value()));
        let next_cpu = self.cpu_walk.step(&mut self.rng, health.cpu_usage);
        let next_health = health.with_cpu(next_cpu, now);

        tracing::trace!(load = %next_load, cpu = next_cpu, "simulation: tick");

        (next_load, next_health)
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}
