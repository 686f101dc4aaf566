//! # synapse-core
//!
//! Foundation crate for the Synapse adaptive-load control plane.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod throttle;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SynapseConfig;
pub use errors::{SynapseError, SynapseResult};
pub use models::{CognitiveLoad, InsightSummary, SystemHealthSnapshot};
pub use traits::IInsightProvider;
