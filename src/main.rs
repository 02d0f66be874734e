//! TOPFLOW — Directional Flow Screening Bot
//!
//! Entry point. Loads configuration, resolves secrets, initialises
//! structured logging, and runs the fetch → rank → alert loop on a
//! fixed cadence until interrupted.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use topflow::alert::discord::DiscordWebhook;
use topflow::config::{AppConfig, Secrets};
use topflow::engine::scanner::{run_cycle, FlowScanner};
use topflow::quote::twelvedata::TwelveDataClient;

const BANNER: &str = r#"
 _____ ___  ____  _____ _     _____        __
|_   _/ _ \|  _ \|  ___| |   / _ \ \      / /
  | || | | | |_) | |_  | |  | | | \ \ /\ / /
  | || |_| |  __/|  _| | |__| |_| |\ V  V /
  |_| \___/|_|   |_|   |_____\___/  \_/\_/

  Top Flow — directional flow screening
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = AppConfig::load("config.toml")?;

    // Both secrets are required; a missing one terminates the process
    // before any fetch happens.
    let secrets = Secrets::resolve(&cfg)?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        symbols = cfg.agent.watchlist.len(),
        scan_interval_secs = cfg.agent.scan_interval_secs,
        exchange = %cfg.agent.exchange,
        "TOPFLOW starting up"
    );

    // -- Initialise components -------------------------------------------

    let source = TwelveDataClient::new(secrets.api_key, cfg.agent.exchange.clone())?;
    let scanner = FlowScanner::new(Arc::new(source), cfg.agent.watchlist.clone());
    let sink = DiscordWebhook::new(secrets.webhook_url)?;

    // -- Main loop -------------------------------------------------------

    let cycle_period = Duration::from_secs(cfg.agent.scan_interval_secs);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(
        period_secs = cfg.agent.scan_interval_secs,
        "Entering scan loop. Press Ctrl+C to stop."
    );

    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        let _ = run_cycle(cycle, &scanner, &sink).await;

        // The fixed period is slept after the cycle finishes, so the
        // actual cadence is period + cycle execution time.
        tokio::select! {
            _ = tokio::time::sleep(cycle_period) => {}
            _ = &mut shutdown => {
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    info!(cycles = cycle, "TOPFLOW shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("topflow=info"));

    let json_logging = std::env::var("TOPFLOW_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
