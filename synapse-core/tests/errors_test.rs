use synapse_core::errors::{ConfigError, InsightError, SynapseError};

#[test]
fn insight_errors_render_their_context() {
    let err = InsightError::Api {
        status: 429,
        reason: "quota exhausted".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "provider returned HTTP 429: quota exhausted"
    );

    let err = InsightError::MissingCredential {
        provider: "gemini".to_string(),
    };
    assert!(err.to_string().contains("gemini"));
}

#[test]
fn subsystem_errors_wrap_into_synapse_error() {
    let err: SynapseError = InsightError::EmptyResponse.into();
    assert!(matches!(
        err,
        SynapseError::Insight(InsightError::EmptyResponse)
    ));
    assert!(err.to_string().starts_with("insight generation failed"));

    let err: SynapseError = ConfigError::Parse {
        reason: "bad value".to_string(),
    }
    .into();
    assert!(matches!(err, SynapseError::Config(_)));
}
