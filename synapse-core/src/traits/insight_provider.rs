use std::future::Future;

use crate::errors::SynapseResult;
use crate::models::InsightSummary;

/// Generative-insight provider.
///
/// The one external collaborator of the system. Implementations turn a
/// state summary into free-form advisory text; every failure mode surfaces
/// as an `Err`, which the refresher recovers locally. The returned future
/// is `Send` so refreshes can run on spawned tasks.
pub trait IInsightProvider: Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether a credential is configured. When false the refresher
    /// short-circuits without attempting a call.
    fn is_configured(&self) -> bool;

    /// Generate advisory text from a system-state summary.
    fn generate(
        &self,
        summary: &InsightSummary,
    ) -> impl Future<Output = SynapseResult<String>> + Send;
}
