//! The explicit dashboard state container.
//!
//! All mutable observable state lives here, each field written by exactly
//! one producer: the simulator task writes load and health, the insight
//! task writes the text and the refreshing flag. Everything else is seeded
//! once and static.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use synapse_core::constants::INSIGHT_BOOT_TEXT;
use synapse_core::models::{
    AgentDefinition, CognitiveLoad, FeatureDefinition, SystemHealthSnapshot, ThrottlingPolicy,
    TokenRailMetrics,
};

use crate::seed;

/// Process-scoped dashboard state. Created at startup, lives in memory,
/// vanishes on exit.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub cognitive_load: CognitiveLoad,
    pub health: SystemHealthSnapshot,
    /// Backfilled gauge window for the resource chart; static after seeding.
    pub health_history: Vec<SystemHealthSnapshot>,
    pub features: Vec<FeatureDefinition>,
    pub policies: Vec<ThrottlingPolicy>,
    pub rails: Vec<TokenRailMetrics>,
    pub agents: Vec<AgentDefinition>,
    /// Latest advisory text; overwritten on every completed refresh.
    pub insight_text: String,
    pub insight_refreshing: bool,
}

impl DashboardState {
    /// Seed the container with the mock catalog and a backfilled health
    /// window ending at `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let health_history = seed::health_history(now);
        let health = health_history
            .last()
            .cloned()
            .unwrap_or_else(|| seed::baseline_snapshot(now));

        Self {
            cognitive_load: CognitiveLoad::default(),
            health,
            health_history,
            features: seed::features(now),
            policies: seed::policies(now),
            rails: seed::rails(now),
            agents: seed::agents(now),
            insight_text: INSIGHT_BOOT_TEXT.to_string(),
            insight_refreshing: false,
        }
    }
}

/// Writable handle held by the runtime tasks.
#[derive(Debug, Clone)]
pub struct StateHandle {
    inner: Arc<RwLock<DashboardState>>,
}

impl StateHandle {
    pub fn new(state: DashboardState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Run a mutation against the state under the write lock.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut DashboardState),
    {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }

    /// Clone out the current state.
    pub fn snapshot(&self) -> DashboardState {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Read-only view for the display collaborator.
    pub fn reader(&self) -> ReadHandle {
        ReadHandle {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Read-only view of the dashboard state. Cloneable and cheap to share;
/// exposes no mutation.
#[derive(Debug, Clone)]
pub struct ReadHandle {
    inner: Arc<RwLock<DashboardState>>,
}

impl ReadHandle {
    /// Clone out the current state.
    pub fn snapshot(&self) -> DashboardState {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Run a closure against the state under the read lock.
    pub fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }
}
