/// Synapse system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Throttle hint threshold for user-facing messaging.
pub const DISPLAY_THROTTLE_THRESHOLD: f64 = 0.75;

/// Throttle signal threshold embedded in insight payloads as a diagnostic flag.
/// Distinct from the display hint; the two are tuned for different consumers.
pub const INSIGHT_THROTTLE_THRESHOLD: f64 = 0.80;

/// Lower bound of the simulated cognitive-load scale.
pub const COGNITIVE_LOAD_FLOOR: f64 = 0.10;
/// Upper bound of the simulated cognitive-load scale.
pub const COGNITIVE_LOAD_CEILING: f64 = 0.98;

/// Simulated CPU utilization bounds (percent).
pub const CPU_FLOOR: f64 = 30.0;
pub const CPU_CEILING: f64 = 95.0;

/// Metric simulator tick period (seconds).
pub const DEFAULT_SIMULATION_TICK_SECS: u64 = 3;

/// Insight refresh period (seconds). Also fires once at startup.
pub const DEFAULT_INSIGHT_REFRESH_SECS: u64 = 60;

/// Placeholder insight text shown before the first refresh completes.
pub const INSIGHT_BOOT_TEXT: &str = "Initializing agentic analysis...";

/// Insight text used when no API credential is configured.
pub const INSIGHT_NOT_CONFIGURED_TEXT: &str = "API key not configured for AI insights.";

/// Insight text used when the generation call fails.
pub const INSIGHT_FALLBACK_TEXT: &str = "Error communicating with the agentic AI layer.";
