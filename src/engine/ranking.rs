//! Extremal selection over one scan cycle.
//!
//! `FlowRanker` folds valid quotes into a running best-of-cycle: the
//! quote with the largest absolute flow score wins, sign preserved for
//! the direction label.

use crate::types::{CycleResult, Direction, SymbolQuote};

/// Per-cycle accumulator. Create one per cycle, `offer` each valid
/// quote in watchlist order, then `finalize`.
#[derive(Debug, Default)]
pub struct FlowRanker {
    best: Option<SymbolQuote>,
}

impl FlowRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a quote into the running best.
    ///
    /// The first offered quote is retained unconditionally. After
    /// that, replacement requires a strictly larger absolute flow
    /// score — exact ties keep the earlier-encountered symbol, so
    /// watchlist order is the tie-break.
    pub fn offer(&mut self, quote: SymbolQuote) {
        let replace = match &self.best {
            None => true,
            Some(best) => quote.flow_score.abs() > best.flow_score.abs(),
        };
        if replace {
            self.best = Some(quote);
        }
    }

    /// The cycle's winner, or `None` when nothing was offered.
    pub fn finalize(self) -> Option<CycleResult> {
        self.best.map(|quote| {
            let direction = Direction::from_flow(quote.flow_score);
            CycleResult { quote, direction }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
