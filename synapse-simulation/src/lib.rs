//! # synapse-simulation
//!
//! The metric simulator: advances the cognitive-load scalar and the CPU
//! gauge of the health snapshot on each tick using bounded random-walk
//! jitter. Pure state transitions over an owned RNG; no failure modes.

pub mod engine;
pub mod walk;

pub use engine::SimulationEngine;
pub use walk::BoundedWalk;
