use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentCategory {
    FraudDetection,
    Orchestration,
    Forecasting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentSkill {
    AnomalyDetection,
    RiskAssessment,
    LoadForecasting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Paused,
    Retired,
}

/// An autonomous agent registered with the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AgentCategory,
    pub skills: Vec<AgentSkill>,
    pub status: AgentStatus,
    /// Operational load above which this agent defers its work.
    pub operational_load_threshold: u32,
    pub owner_team: String,
    pub last_updated: DateTime<Utc>,
}
