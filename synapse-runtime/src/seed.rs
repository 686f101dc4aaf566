//! Seeded mock catalog for the dashboard.
//!
//! The control plane has no real ingestion; these records are the observed
//! demo dataset, created once at startup and static afterwards (except the
//! CPU gauge, which the simulator walks).

use chrono::{DateTime, Duration, Utc};

use synapse_core::models::{
    AgentCategory, AgentDefinition, AgentSkill, AgentStatus, FeatureCategory, FeatureDefinition,
    RailStatus, SystemHealthSnapshot, ThresholdConfig, ThrottlingPolicy, ThrottlingStrategy,
    TokenRailMetrics, TokenRailType,
};

/// Spacing between backfilled health points.
const HISTORY_STEP_SECS: i64 = 30;
/// Number of backfilled health points.
const HISTORY_LEN: usize = 20;

/// A plausible mid-range snapshot used as the backfill baseline.
pub fn baseline_snapshot(timestamp: DateTime<Utc>) -> SystemHealthSnapshot {
    SystemHealthSnapshot {
        timestamp,
        cpu_usage: 61.0,
        memory_usage: 68.0,
        network_latency_ms: 42.0,
        database_connections: 156,
        error_rate: 0.18,
        queue_depth: 74,
        active_users: 1012,
        background_tasks: 19,
        disk_io: 388,
        api_call_rate: 1430,
    }
}

/// Backfilled gauge window ending at `now`, oldest first.
///
/// Values wobble deterministically around the baseline so the chart has
/// texture without an RNG in the seed path.
pub fn health_history(now: DateTime<Utc>) -> Vec<SystemHealthSnapshot> {
    (0..HISTORY_LEN)
        .map(|i| {
            let age = (HISTORY_LEN - 1 - i) as i64;
            let wobble = ((i * 7) % 11) as f64 - 5.0;
            let base = baseline_snapshot(now - Duration::seconds(age * HISTORY_STEP_SECS));
            SystemHealthSnapshot {
                cpu_usage: (base.cpu_usage + wobble * 2.0).clamp(30.0, 95.0),
                memory_usage: base.memory_usage + wobble,
                network_latency_ms: base.network_latency_ms + wobble.abs() * 3.0,
                queue_depth: base.queue_depth + ((i * 13) % 40) as u32,
                active_users: base.active_users + ((i * 29) % 150) as u32,
                api_call_rate: base.api_call_rate + ((i * 53) % 280) as u32,
                ..base
            }
        })
        .collect()
}

pub fn features(now: DateTime<Utc>) -> Vec<FeatureDefinition> {
    let feature = |id: &str,
                   name: &str,
                   description: &str,
                   category: FeatureCategory,
                   cognitive_weight: f64,
                   base_throttle_threshold: f64,
                   owner_team: &str| FeatureDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        cognitive_weight,
        base_throttle_threshold,
        is_active: true,
        owner_team: owner_team.to_string(),
        last_updated: now,
    };

    vec![
        feature(
            "feat_adv_analytics",
            "Advanced Analytics",
            "Provides deep dive data analysis tools.",
            FeatureCategory::Analytics,
            0.9,
            0.8,
            "Data Science",
        ),
        feature(
            "feat_realtime_collaboration",
            "Realtime Collaboration",
            "Enables live document editing and chat.",
            FeatureCategory::Collaboration,
            0.8,
            0.75,
            "Productivity Suite",
        ),
        feature(
            "feat_ai_assistant",
            "AI Assistant",
            "Provides intelligent suggestions and automation.",
            FeatureCategory::Automation,
            0.95,
            0.88,
            "AI Research",
        ),
        feature(
            "feat_token_rail_monitor",
            "Token Rail Monitor",
            "Observe real-time performance of token rails.",
            FeatureCategory::TokenRails,
            0.6,
            0.7,
            "Fintech Core",
        ),
        feature(
            "feat_identity_security",
            "Identity & Security Controls",
            "Configure digital identity and access policies.",
            FeatureCategory::Identity,
            0.9,
            0.9,
            "Security Team",
        ),
    ]
}

pub fn policies(now: DateTime<Utc>) -> Vec<ThrottlingPolicy> {
    vec![ThrottlingPolicy {
        id: "policy_high_load_general".to_string(),
        name: "High Load General Throttling".to_string(),
        description: "Activates when overall cognitive load is very high.".to_string(),
        strategy: ThrottlingStrategy::DynamicAdaptive,
        target_feature_ids: vec![
            "feat_adv_analytics".to_string(),
            "feat_ai_assistant".to_string(),
        ],
        threshold_config: ThresholdConfig {
            min_load: 0.85,
            max_load: 0.95,
            duration_threshold_secs: 60,
            cooldown_secs: 300,
        },
        priority: 1,
        is_active: true,
        last_modified_by: "admin".to_string(),
        last_modified_date: now,
    }]
}

pub fn rails(now: DateTime<Utc>) -> Vec<TokenRailMetrics> {
    vec![
        TokenRailMetrics {
            timestamp: now,
            rail_id: "rail_fast".to_string(),
            rail_type: TokenRailType::Fast,
            tps: 1450,
            avg_latency_ms: 45.0,
            error_rate: 0.001,
            queue_depth: 12,
            status: RailStatus::Operational,
            total_value_transacted: 12_500_000,
        },
        TokenRailMetrics {
            timestamp: now,
            rail_id: "rail_batch".to_string(),
            rail_type: TokenRailType::Batch,
            tps: 8500,
            avg_latency_ms: 1200.0,
            error_rate: 0.005,
            queue_depth: 450,
            status: RailStatus::Degraded,
            total_value_transacted: 45_000_000,
        },
    ]
}

pub fn agents(now: DateTime<Utc>) -> Vec<AgentDefinition> {
    vec![AgentDefinition {
        id: "agent_fraud_detector".to_string(),
        name: "Fraud Detection Agent".to_string(),
        description: "Monitors transactions for suspicious patterns.".to_string(),
        category: AgentCategory::FraudDetection,
        skills: vec![AgentSkill::AnomalyDetection, AgentSkill::RiskAssessment],
        status: AgentStatus::Active,
        operational_load_threshold: 100,
        owner_team: "Security AI".to_string(),
        last_updated: now,
    }]
}
