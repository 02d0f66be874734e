//! Quote data sources.
//!
//! Defines the `QuoteSource` trait and provides the Twelve Data
//! implementation used in production.

pub mod twelvedata;

use anyhow::Result;
use async_trait::async_trait;

/// Abstraction over quote-data providers.
///
/// Implementors fetch one raw payload per symbol. The scanner treats
/// any failure as "skip this symbol for this cycle" — no retry.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the raw quote payload for a symbol.
    async fn fetch_raw(&self, symbol: &str) -> Result<String>;

    /// Source name for logging and identification.
    fn name(&self) -> &str;
}
