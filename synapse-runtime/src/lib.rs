//! # synapse-runtime
//!
//! Wires the simulator and the insight refresher around an explicit owned
//! state container. Two cancelable periodic tasks mutate the state; the
//! display collaborator holds a read-only handle and may trigger a manual
//! refresh, which is dropped while one is already in flight.

pub mod runtime;
pub mod seed;
pub mod state;
pub mod telemetry;

pub use runtime::SynapseRuntime;
pub use state::{DashboardState, ReadHandle, StateHandle};
