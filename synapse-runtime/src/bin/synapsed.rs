//! synapsed — runs the simulation and insight loops until interrupted.
//!
//! Configuration comes from the TOML file named by `SYNAPSE_CONFIG` when
//! set, otherwise from defaults; the Gemini credential is read from
//! `GEMINI_API_KEY` either way.

use anyhow::Result;

use synapse_core::config::SynapseConfig;
use synapse_core::constants::VERSION;
use synapse_insight::GeminiProvider;
use synapse_runtime::{telemetry, SynapseRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let config = match std::env::var("SYNAPSE_CONFIG") {
        Ok(path) => SynapseConfig::from_file(path)?,
        Err(_) => SynapseConfig::from_env(),
    };

    let provider = GeminiProvider::new(config.insight.clone());
    if !config.insight.has_credential() {
        tracing::warn!("no GEMINI_API_KEY set; insights will report as not configured");
    }

    let mut runtime = SynapseRuntime::start(config, provider);
    tracing::info!(version = VERSION, "synapsed running, ctrl-c to stop");

    tokio::signal::ctrl_c().await?;
    runtime.shutdown().await;
    Ok(())
}
