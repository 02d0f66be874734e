//! Watchlist scanner — one full fetch → derive → rank pass.
//!
//! Symbols are processed strictly sequentially in watchlist order;
//! that order is also the tie-break for extremal selection. A symbol
//! that fails to fetch or derive is skipped for this cycle only.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::alert::{format as alert_format, AlertSink};
use crate::engine::metrics;
use crate::engine::ranking::FlowRanker;
use crate::quote::QuoteSource;
use crate::types::ScanReport;

/// Runs one scan cycle over a fixed watchlist.
pub struct FlowScanner {
    source: Arc<dyn QuoteSource>,
    watchlist: Vec<String>,
}

impl FlowScanner {
    pub fn new(source: Arc<dyn QuoteSource>, watchlist: Vec<String>) -> Self {
        Self { source, watchlist }
    }

    /// Run one full pass over the watchlist and return the cycle's
    /// report. Per-symbol metric lines are emitted as each symbol
    /// completes, not batched at the end.
    pub async fn scan(&self) -> ScanReport {
        info!(
            source = self.source.name(),
            symbols = self.watchlist.len(),
            "Fetching tickers"
        );

        let mut ranker = FlowRanker::new();
        let mut skipped = 0usize;

        for symbol in &self.watchlist {
            let payload = match self.source.fetch_raw(symbol).await {
                Ok(p) => p,
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Fetch failed, skipping");
                    skipped += 1;
                    continue;
                }
            };

            let quote = match metrics::derive_quote(&payload, symbol) {
                Ok(q) => q,
                Err(reason) => {
                    debug!(symbol = %symbol, %reason, "No usable quote, skipping");
                    skipped += 1;
                    continue;
                }
            };

            info!("{quote}");
            ranker.offer(quote);
        }

        ScanReport {
            top: ranker.finalize(),
            symbols_scanned: self.watchlist.len(),
            symbols_skipped: skipped,
        }
    }
}

/// Run a single fetch → derive → rank → alert cycle.
///
/// Nothing in here stops the loop: per-symbol failures are skipped by
/// the scanner, an empty cycle ends without a notification, and a
/// failed delivery is logged and forgotten. Returns the cycle's scan
/// report.
pub async fn run_cycle(cycle: u64, scanner: &FlowScanner, sink: &dyn AlertSink) -> ScanReport {
    info!(cycle, "Starting cycle");

    let report = scanner.scan().await;
    info!(cycle, %report, "Cycle complete");

    if let Some(result) = &report.top {
        let alert = alert_format::build_alert(result);
        println!("{}", alert.console_report);

        if let Err(e) = sink.deliver(&alert.delivery_payload).await {
            warn!(sink = sink.name(), error = %e, "Alert delivery failed");
        }
    }

    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
