/// Insight generation errors.
///
/// Every failure mode of the external generative collaborator funnels into
/// one of these variants; the refresher recovers all of them locally.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("no API credential configured for provider {provider}")]
    MissingCredential { provider: String },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("provider returned HTTP {status}: {reason}")]
    Api { status: u16, reason: String },

    #[error("malformed provider response: {reason}")]
    MalformedResponse { reason: String },

    #[error("provider returned empty text")]
    EmptyResponse,
}
