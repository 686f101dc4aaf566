pub mod agent;
pub mod cognitive_load;
pub mod feature;
pub mod health;
pub mod insight;
pub mod policy;
pub mod rail;

pub use agent::{AgentCategory, AgentDefinition, AgentSkill, AgentStatus};
pub use cognitive_load::CognitiveLoad;
pub use feature::{FeatureCategory, FeatureDefinition};
pub use health::SystemHealthSnapshot;
pub use insight::InsightSummary;
pub use policy::{ThresholdConfig, ThrottlingPolicy, ThrottlingStrategy};
pub use rail::{RailStatus, TokenRailMetrics, TokenRailType};
