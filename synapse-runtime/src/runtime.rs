//! SynapseRuntime — spawns and cancels the two periodic tasks.
//!
//! Both loops run on the tokio clock (virtual under test) and listen on a
//! shared watch channel for shutdown, so teardown is deterministic: after
//! `shutdown()` returns, no further state mutation can occur.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use synapse_core::config::SynapseConfig;
use synapse_core::traits::IInsightProvider;
use synapse_insight::{summary, InsightEngine};
use synapse_simulation::SimulationEngine;

use crate::state::{DashboardState, ReadHandle, StateHandle};

/// Handle to the running control-plane loops.
pub struct SynapseRuntime {
    state: StateHandle,
    shutdown_tx: watch::Sender<bool>,
    refresh_trigger: Arc<Notify>,
    sim_task: Option<JoinHandle<()>>,
    insight_task: Option<JoinHandle<()>>,
}

impl SynapseRuntime {
    /// Seed the state and spawn the simulator and insight loops.
    ///
    /// The insight loop fires once immediately (the startup refresh), then
    /// on its configured period. The simulator first fires after one full
    /// tick period.
    pub fn start<P>(config: SynapseConfig, provider: P) -> Self
    where
        P: IInsightProvider + 'static,
    {
        let state = StateHandle::new(DashboardState::seeded(Utc::now()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let refresh_trigger = Arc::new(Notify::new());

        let sim_engine = SimulationEngine::new(&config.simulation);
        let insight_engine = Arc::new(InsightEngine::new(provider));

        let sim_task = tokio::spawn(simulation_loop(
            state.clone(),
            sim_engine,
            config.simulation.tick_interval_secs,
            shutdown_rx.clone(),
        ));
        let insight_task = tokio::spawn(insight_loop(
            state.clone(),
            insight_engine,
            config.insight.refresh_interval_secs,
            Arc::clone(&refresh_trigger),
            shutdown_rx,
        ));

        tracing::info!(
            tick_secs = config.simulation.tick_interval_secs,
            refresh_secs = config.insight.refresh_interval_secs,
            "runtime: started"
        );

        Self {
            state,
            shutdown_tx,
            refresh_trigger,
            sim_task: Some(sim_task),
            insight_task: Some(insight_task),
        }
    }

    /// Read-only state view for the display collaborator.
    pub fn reader(&self) -> ReadHandle {
        self.state.reader()
    }

    /// Request an out-of-band insight refresh.
    ///
    /// Wakes the insight loop if it is idle; if a refresh is already in
    /// flight the trigger is dropped, not queued.
    pub fn trigger_refresh(&self) {
        self.refresh_trigger.notify_waiters();
    }

    /// Stop both loops and wait for them to drain. Idempotent; a second
    /// call is a no-op.
    pub async fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);
        for task in [self.sim_task.take(), self.insight_task.take()]
            .into_iter()
            .flatten()
        {
            let _ = task.await;
        }
        tracing::info!("runtime: stopped");
    }
}

async fn simulation_loop(
    state: StateHandle,
    mut engine: SimulationEngine,
    tick_secs: u64,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(Duration::from_secs(tick_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately; the seeded state is
    // already current, so consume it and start mutating one period in.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Utc::now();
                state.update(|st| {
                    let (load, health) = engine.tick(st.cognitive_load, &st.health, now);
                    st.cognitive_load = load;
                    st.health = health;
                });
            }
            _ = shutdown.changed() => break,
        }
    }
    tracing::debug!("simulation: loop stopped");
}

async fn insight_loop<P: IInsightProvider>(
    state: StateHandle,
    engine: Arc<InsightEngine<P>>,
    refresh_secs: u64,
    trigger: Arc<Notify>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(Duration::from_secs(refresh_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => run_refresh(&state, &engine).await,
            _ = trigger.notified() => run_refresh(&state, &engine).await,
            _ = shutdown.changed() => break,
        }
    }
    tracing::debug!("insight: loop stopped");
}

async fn run_refresh<P: IInsightProvider>(state: &StateHandle, engine: &InsightEngine<P>) {
    let summary = {
        let snapshot = state.snapshot();
        summary::build_summary(
            snapshot.cognitive_load,
            snapshot.health.cpu_usage,
            &snapshot.features,
        )
    };

    state.update(|st| st.insight_refreshing = true);
    let outcome = engine.refresh(summary).await;
    state.update(|st| {
        st.insight_refreshing = false;
        if let Some(text) = outcome.text() {
            st.insight_text = text.to_string();
        }
    });
}
