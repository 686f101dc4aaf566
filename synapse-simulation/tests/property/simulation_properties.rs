use chrono::Utc;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use synapse_core::config::SimulationConfig;
use synapse_core::models::{CognitiveLoad, SystemHealthSnapshot};
use synapse_core::throttle;
use synapse_simulation::{BoundedWalk, SimulationEngine};

fn make_snapshot(cpu: f64) -> SystemHealthSnapshot {
    SystemHealthSnapshot {
        timestamp: Utc::now(),
        cpu_usage: cpu,
        memory_usage: 60.0,
        network_latency_ms: 30.0,
        database_connections: 120,
        error_rate: 0.1,
        queue_depth: 40,
        active_users: 950,
        background_tasks: 15,
        disk_io: 320,
        api_call_rate: 1300,
    }
}

// ── Clamp invariants ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn next_load_stays_in_bounds(
        prev in 0.10f64..=0.98,
        seed in any::<u64>(),
    ) {
        let mut engine = SimulationEngine::new(&SimulationConfig::default()).with_seed(seed);
        let (next, _) = engine.tick(CognitiveLoad::new(prev), &make_snapshot(60.0), Utc::now());
        prop_assert!(
            (0.10..=0.98).contains(&next.value()),
            "Load out of bounds: {} from prev {}",
            next.value(),
            prev
        );
    }
}

proptest! {
    #[test]
    fn next_cpu_stays_in_bounds(
        prev in 30.0f64..=95.0,
        seed in any::<u64>(),
    ) {
        let mut engine = SimulationEngine::new(&SimulationConfig::default()).with_seed(seed);
        let (_, next) = engine.tick(CognitiveLoad::default(), &make_snapshot(prev), Utc::now());
        prop_assert!(
            (30.0..=95.0).contains(&next.cpu_usage),
            "CPU out of bounds: {} from prev {}",
            next.cpu_usage,
            prev
        );
    }
}

proptest! {
    #[test]
    fn walk_step_stays_in_bounds_for_arbitrary_parameters(
        prev in -1.0f64..=2.0,
        bias in 0.0f64..=1.0,
        scale in 0.001f64..=10.0,
        seed in any::<u64>(),
    ) {
        let walk = BoundedWalk::new(0.0, 1.0, bias, scale);
        let mut rng = StdRng::seed_from_u64(seed);
        let next = walk.step(&mut rng, prev.clamp(0.0, 1.0));
        prop_assert!((0.0..=1.0).contains(&next));
    }
}

// ── Throttle monotonicity ────────────────────────────────────────────────

proptest! {
    #[test]
    fn throttling_is_monotonic(
        lower in 0.10f64..=0.98,
        upper in 0.10f64..=0.98,
    ) {
        prop_assume!(upper > lower);
        let low = CognitiveLoad::new(lower);
        let high = CognitiveLoad::new(upper);

        if throttle::display_hint(low) {
            prop_assert!(throttle::display_hint(high));
        }
        if throttle::analytic_signal(low) {
            prop_assert!(throttle::analytic_signal(high));
        }
    }
}
