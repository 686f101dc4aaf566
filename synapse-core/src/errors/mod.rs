//! Error types for the Synapse workspace.
//!
//! Subsystem errors are their own enums; [`SynapseError`] wraps them so
//! callers can match on the subsystem or bubble with `?`.

mod config_error;
mod insight_error;

pub use config_error::ConfigError;
pub use insight_error::InsightError;

/// Result type used across the workspace.
pub type SynapseResult<T> = Result<T, SynapseError>;

/// Top-level error for all Synapse subsystems.
#[derive(Debug, thiserror::Error)]
pub enum SynapseError {
    #[error("insight generation failed: {0}")]
    Insight(#[from] InsightError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
