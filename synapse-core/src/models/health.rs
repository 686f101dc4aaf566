use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of the simulated system gauges.
///
/// The simulator jitters `cpu_usage` within [30, 95] and refreshes
/// `timestamp` on every tick; all other gauges are held static by that
/// operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealthSnapshot {
    pub timestamp: DateTime<Utc>,
    /// CPU utilization percent, invariant [30, 95].
    pub cpu_usage: f64,
    /// Memory utilization percent.
    pub memory_usage: f64,
    /// Network round-trip latency in milliseconds.
    pub network_latency_ms: f64,
    pub database_connections: u32,
    pub error_rate: f64,
    pub queue_depth: u32,
    pub active_users: u32,
    pub background_tasks: u32,
    pub disk_io: u32,
    /// API calls per second.
    pub api_call_rate: u32,
}

impl SystemHealthSnapshot {
    /// Copy of this snapshot with a new CPU reading and a fresh timestamp.
    pub fn with_cpu(&self, cpu_usage: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            cpu_usage,
            timestamp,
            ..self.clone()
        }
    }
}
