//! Default configuration values, observed from the reference deployment.

pub const DEFAULT_LOAD_JITTER_BIAS: f64 = 0.45;
pub const DEFAULT_LOAD_JITTER_SCALE: f64 = 0.1;
pub const DEFAULT_CPU_JITTER_BIAS: f64 = 0.5;
pub const DEFAULT_CPU_JITTER_SCALE: f64 = 5.0;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_INSIGHT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
