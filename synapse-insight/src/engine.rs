//! InsightEngine — refresh orchestration over a provider seam.
//!
//! The engine never propagates a provider failure: both result arms are
//! matched explicitly and every degraded path lands on a fixed string.

use std::sync::atomic::{AtomicBool, Ordering};

use synapse_core::constants::{INSIGHT_FALLBACK_TEXT, INSIGHT_NOT_CONFIGURED_TEXT};
use synapse_core::models::InsightSummary;
use synapse_core::traits::IInsightProvider;

/// Outcome of one refresh attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightOutcome {
    /// The provider returned text; stored verbatim.
    Generated(String),
    /// The provider failed or returned empty text.
    Fallback,
    /// No credential configured; no call was attempted.
    NotConfigured,
    /// Another refresh was already in flight; this trigger was dropped.
    Skipped,
}

impl InsightOutcome {
    /// The text to store for this outcome, or None when state is unchanged.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generated(text) => Some(text),
            Self::Fallback => Some(INSIGHT_FALLBACK_TEXT),
            Self::NotConfigured => Some(INSIGHT_NOT_CONFIGURED_TEXT),
            Self::Skipped => None,
        }
    }
}

/// Refresh orchestrator. Holds the in-progress guard; at most one provider
/// call is in flight regardless of how many triggers race.
#[derive(Debug)]
pub struct InsightEngine<P> {
    provider: P,
    refreshing: AtomicBool,
}

impl<P: IInsightProvider> InsightEngine<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            refreshing: AtomicBool::new(false),
        }
    }

    /// Whether a refresh is currently in flight. Display layers use this to
    /// disable the manual trigger.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::SeqCst)
    }

    /// Run one refresh against the provider.
    ///
    /// Entry is guarded by an atomic swap: a caller that loses the race gets
    /// [`InsightOutcome::Skipped`] and no second call starts. The guard is
    /// cleared on every other path, success or failure.
    pub async fn refresh(&self, summary: InsightSummary) -> InsightOutcome {
        if self.refreshing.swap(true, Ordering::SeqCst) {
            tracing::debug!("insight: refresh already in flight, trigger dropped");
            return InsightOutcome::Skipped;
        }

        let outcome = self.refresh_inner(&summary).await;
        self.refreshing.store(false, Ordering::SeqCst);
        outcome
    }

    async fn refresh_inner(&self, summary: &InsightSummary) -> InsightOutcome {
        if !self.provider.is_configured() {
            tracing::info!(
                provider = self.provider.name(),
                "insight: no credential configured, skipping call"
            );
            return InsightOutcome::NotConfigured;
        }

        let request_id = uuid::Uuid::new_v4();
        tracing::info!(
            %request_id,
            provider = self.provider.name(),
            load = summary.cognitive_load,
            throttling = summary.throttling_active,
            "insight: refreshing"
        );

        match self.provider.generate(summary).await {
            Ok(text) if !text.trim().is_empty() => {
                tracing::info!(%request_id, chars = text.len(), "insight: refreshed");
                InsightOutcome::Generated(text)
            }
            Ok(_) => {
                tracing::warn!(%request_id, "insight: provider returned empty text");
                InsightOutcome::Fallback
            }
            Err(e) => {
                tracing::warn!(%request_id, error = %e, "insight: generation failed");
                InsightOutcome::Fallback
            }
        }
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
