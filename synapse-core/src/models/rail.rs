use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settlement class of a token rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRailType {
    Fast,
    Batch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailStatus {
    Operational,
    Degraded,
    Down,
}

/// Throughput and health gauges for one token transfer rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRailMetrics {
    pub timestamp: DateTime<Utc>,
    pub rail_id: String,
    pub rail_type: TokenRailType,
    /// Transactions per second.
    pub tps: u32,
    pub avg_latency_ms: f64,
    pub error_rate: f64,
    pub queue_depth: u32,
    pub status: RailStatus,
    pub total_value_transacted: u64,
}
