use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use synapse_core::constants::{INSIGHT_FALLBACK_TEXT, INSIGHT_NOT_CONFIGURED_TEXT};
use synapse_core::errors::{InsightError, SynapseResult};
use synapse_core::models::InsightSummary;
use synapse_core::traits::IInsightProvider;
use synapse_insight::{InsightEngine, InsightOutcome};

fn make_summary() -> InsightSummary {
    InsightSummary {
        cognitive_load: 0.42,
        cpu: 55.0,
        active_features: 5,
        throttling_active: false,
    }
}

/// Provider that counts calls and returns a canned reply or error.
struct ScriptedProvider {
    configured: bool,
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn replying(reply: &str) -> Self {
        Self {
            configured: true,
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            configured: true,
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn unconfigured() -> Self {
        Self {
            configured: false,
            reply: Some("should never be seen".to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IInsightProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn generate(
        &self,
        _summary: &InsightSummary,
    ) -> impl Future<Output = SynapseResult<String>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.clone();
        async move {
            match reply {
                Some(text) => Ok(text),
                None => Err(InsightError::Network {
                    reason: "connection refused".to_string(),
                }
                .into()),
            }
        }
    }
}

/// Provider whose call parks on the tokio clock, for overlap tests.
struct SlowProvider {
    reply: String,
    calls: AtomicUsize,
}

impl SlowProvider {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl IInsightProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn generate(
        &self,
        _summary: &InsightSummary,
    ) -> impl Future<Output = SynapseResult<String>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.clone();
        async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(reply)
        }
    }
}

// ── Success path ─────────────────────────────────────────────────────────

#[tokio::test]
async fn generated_text_is_stored_verbatim() {
    let engine = InsightEngine::new(ScriptedProvider::replying("Reduce queue depth.\nRotate keys."));
    let outcome = engine.refresh(make_summary()).await;

    assert_eq!(
        outcome,
        InsightOutcome::Generated("Reduce queue depth.\nRotate keys.".to_string())
    );
    assert_eq!(outcome.text(), Some("Reduce queue depth.\nRotate keys."));
    assert!(!engine.is_refreshing());
}

// ── Failure funnels to the fallback string ───────────────────────────────

#[tokio::test]
async fn provider_error_yields_fallback_and_clears_flag() {
    let engine = InsightEngine::new(ScriptedProvider::failing());
    let outcome = engine.refresh(make_summary()).await;

    assert_eq!(outcome, InsightOutcome::Fallback);
    assert_eq!(outcome.text(), Some(INSIGHT_FALLBACK_TEXT));
    assert!(!engine.is_refreshing());
}

#[tokio::test]
async fn empty_reply_yields_fallback() {
    let engine = InsightEngine::new(ScriptedProvider::replying("   \n"));
    let outcome = engine.refresh(make_summary()).await;
    assert_eq!(outcome, InsightOutcome::Fallback);
}

// ── Missing credential short-circuits ────────────────────────────────────

#[tokio::test]
async fn unconfigured_provider_is_never_called() {
    let engine = InsightEngine::new(ScriptedProvider::unconfigured());
    let outcome = engine.refresh(make_summary()).await;

    assert_eq!(outcome, InsightOutcome::NotConfigured);
    assert_eq!(outcome.text(), Some(INSIGHT_NOT_CONFIGURED_TEXT));
    assert_eq!(engine.provider().calls(), 0);
    assert!(!engine.is_refreshing());
}

// ── Overlap guard ────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn refresh_during_in_flight_refresh_is_dropped() {
    let engine = Arc::new(InsightEngine::new(SlowProvider::new("slow reply")));

    let first = tokio::spawn({
        let engine = engine.clone();
        async move { engine.refresh(make_summary()).await }
    });

    // Let the first refresh claim the guard and park on its timer.
    while !engine.is_refreshing() {
        tokio::task::yield_now().await;
    }

    let second = engine.refresh(make_summary()).await;
    assert_eq!(second, InsightOutcome::Skipped);
    assert_eq!(second.text(), None);

    // Only the first call reached the provider.
    assert_eq!(engine.provider().calls.load(Ordering::SeqCst), 1);

    let first = first.await.unwrap();
    assert_eq!(first, InsightOutcome::Generated("slow reply".to_string()));
    assert!(!engine.is_refreshing());
}

#[tokio::test]
async fn sequential_refreshes_are_all_honored() {
    let engine = InsightEngine::new(ScriptedProvider::replying("ok"));
    for _ in 0..3 {
        let outcome = engine.refresh(make_summary()).await;
        assert_eq!(outcome, InsightOutcome::Generated("ok".to_string()));
    }
    assert_eq!(engine.provider().calls(), 3);
}
