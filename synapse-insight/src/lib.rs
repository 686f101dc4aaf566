//! # synapse-insight
//!
//! The insight refresher: packages current derived state into a summary,
//! forwards it to a generative-insight provider, and funnels every failure
//! mode into fixed fallback text. One refresh is in flight at a time;
//! racing triggers are dropped.

pub mod engine;
pub mod provider;
pub mod summary;

pub use engine::{InsightEngine, InsightOutcome};
pub use provider::{GeminiProvider, InsightPromptBuilder};
