//! Shared types for the TOPFLOW bot.
//!
//! These types form the data model used across all modules.
//! They are designed to be stable so that quote, engine, and alert
//! modules can depend on them without circular references.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SymbolQuote
// ---------------------------------------------------------------------------

/// One symbol's metrics for a single scan cycle.
///
/// Constructed from one fetched payload, offered to the ranker, then
/// discarded — never persisted across cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolQuote {
    pub symbol: String,
    pub previous_close: f64,
    pub change: f64,
    pub volume: f64,
    pub percent_change: f64,
    pub average_volume: f64,
    /// `previous_close + change` — the upstream feed carries no live
    /// price field, so the current price is reconstructed.
    pub price: f64,
    /// `volume / average_volume` — multiplier of "normal" activity.
    pub relative_volume: f64,
    /// `percent_change * relative_volume` — signed momentum metric.
    /// Sign gives direction, magnitude gives activity intensity.
    pub flow_score: f64,
}

impl fmt::Display for SymbolQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Price: {:.2} | Volume: {:.0} | RVol {:.4} | Change: {:.4}% | DirectionalFlow: {:.4}",
            self.symbol,
            self.price,
            self.volume,
            self.relative_volume,
            self.percent_change,
            self.flow_score,
        )
    }
}

impl SymbolQuote {
    /// Helper to build a quote with derived metrics precomputed from
    /// the raw fields. Requires `average_volume > 0`.
    pub fn from_fields(
        symbol: &str,
        previous_close: f64,
        change: f64,
        volume: f64,
        percent_change: f64,
        average_volume: f64,
    ) -> Self {
        let relative_volume = volume / average_volume;
        SymbolQuote {
            symbol: symbol.to_string(),
            previous_close,
            change,
            volume,
            percent_change,
            average_volume,
            price: previous_close + change,
            relative_volume,
            flow_score: percent_change * relative_volume,
        }
    }

    /// Helper to build a test quote with a given flow score.
    #[cfg(test)]
    pub fn sample(symbol: &str, flow_score: f64) -> Self {
        SymbolQuote {
            symbol: symbol.to_string(),
            previous_close: 100.0,
            change: 2.0,
            volume: 500_000.0,
            percent_change: 1.5,
            average_volume: 250_000.0,
            price: 102.0,
            relative_volume: 2.0,
            flow_score,
        }
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Which way the top symbol's momentum points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Bullish,
    Bearish,
}

impl Direction {
    /// Zero flow counts as bullish by convention — there is no
    /// separate neutral state.
    pub fn from_flow(flow_score: f64) -> Self {
        if flow_score >= 0.0 {
            Direction::Bullish
        } else {
            Direction::Bearish
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Bullish => write!(f, "TOP BULL FLOW"),
            Direction::Bearish => write!(f, "TOP BEAR FLOW"),
        }
    }
}

// ---------------------------------------------------------------------------
// Cycle results
// ---------------------------------------------------------------------------

/// The winning symbol of one scan cycle, plus its direction label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleResult {
    pub quote: SymbolQuote,
    pub direction: Direction,
}

/// Summary of one full pass over the watchlist.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Absent when every symbol this cycle was skipped.
    pub top: Option<CycleResult>,
    pub symbols_scanned: usize,
    pub symbols_skipped: usize,
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.top {
            Some(result) => write!(
                f,
                "scanned={} skipped={} top={} flow={:.4}",
                self.symbols_scanned,
                self.symbols_skipped,
                result.quote.symbol,
                result.quote.flow_score,
            ),
            None => write!(
                f,
                "scanned={} skipped={} top=none",
                self.symbols_scanned, self.symbols_skipped,
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Reasons a fetched payload yields no usable quote. All of these are
/// per-symbol skips — none of them stops the cycle.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("upstream source reported an error for this request")]
    UpstreamError,

    #[error("no usable volume history (average_volume <= 0)")]
    NoVolumeHistory,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
