use chrono::Utc;
use synapse_core::models::{feature, CognitiveLoad, InsightSummary, SystemHealthSnapshot};
use synapse_core::models::{FeatureCategory, FeatureDefinition};

fn make_feature(id: &str, is_active: bool) -> FeatureDefinition {
    FeatureDefinition {
        id: id.to_string(),
        name: "Test feature".to_string(),
        description: String::new(),
        category: FeatureCategory::Analytics,
        cognitive_weight: 0.5,
        base_throttle_threshold: 0.8,
        is_active,
        owner_team: "Core".to_string(),
        last_updated: Utc::now(),
    }
}

fn make_snapshot(cpu: f64) -> SystemHealthSnapshot {
    SystemHealthSnapshot {
        timestamp: Utc::now(),
        cpu_usage: cpu,
        memory_usage: 62.0,
        network_latency_ms: 40.0,
        database_connections: 150,
        error_rate: 0.1,
        queue_depth: 30,
        active_users: 900,
        background_tasks: 18,
        disk_io: 400,
        api_call_rate: 1400,
    }
}

// ── CognitiveLoad clamp ──────────────────────────────────────────────────

#[test]
fn load_clamps_at_both_boundaries() {
    assert_eq!(CognitiveLoad::new(0.0).value(), CognitiveLoad::FLOOR);
    assert_eq!(CognitiveLoad::new(-3.0).value(), CognitiveLoad::FLOOR);
    assert_eq!(CognitiveLoad::new(1.0).value(), CognitiveLoad::CEILING);
    assert_eq!(CognitiveLoad::new(42.0).value(), CognitiveLoad::CEILING);
}

#[test]
fn load_preserves_in_range_values() {
    let load = CognitiveLoad::new(0.42);
    assert_eq!(load.value(), 0.42);
    assert_eq!(load, CognitiveLoad::default());
}

#[test]
fn load_converts_through_f64() {
    let load: CognitiveLoad = 0.5.into();
    let raw: f64 = load.into();
    assert_eq!(raw, 0.5);
}

// ── SystemHealthSnapshot ─────────────────────────────────────────────────

#[test]
fn with_cpu_updates_only_cpu_and_timestamp() {
    let before = make_snapshot(50.0);
    let now = Utc::now();
    let after = before.with_cpu(72.5, now);

    assert_eq!(after.cpu_usage, 72.5);
    assert_eq!(after.timestamp, now);
    assert_eq!(after.memory_usage, before.memory_usage);
    assert_eq!(after.queue_depth, before.queue_depth);
    assert_eq!(after.api_call_rate, before.api_call_rate);
}

// ── Feature catalog ──────────────────────────────────────────────────────

#[test]
fn active_count_ignores_inactive_features() {
    let features = vec![
        make_feature("a", true),
        make_feature("b", false),
        make_feature("c", true),
    ];
    assert_eq!(feature::active_count(&features), 2);
    assert_eq!(feature::active_count(&[]), 0);
}

// ── InsightSummary serialization ─────────────────────────────────────────

#[test]
fn summary_serializes_with_expected_field_names() {
    let summary = InsightSummary {
        cognitive_load: 0.81,
        cpu: 55.0,
        active_features: 5,
        throttling_active: true,
    };
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["cognitive_load"], 0.81);
    assert_eq!(json["cpu"], 55.0);
    assert_eq!(json["active_features"], 5);
    assert_eq!(json["throttling_active"], true);
}
