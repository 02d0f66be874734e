//! Mocks for integration testing.
//!
//! Provides deterministic `QuoteSource` and `AlertSink` implementations
//! with canned payloads, forced failures, and call recording — all
//! in-memory with no external dependencies.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use topflow::alert::AlertSink;
use topflow::quote::QuoteSource;

/// A mock quote source with a canned payload per symbol.
///
/// Symbols without a payload (or explicitly marked failing) error at
/// the transport layer. Every fetch is recorded in order.
pub struct MockQuoteSource {
    payloads: HashMap<String, String>,
    failing: Vec<String>,
    fetch_log: Mutex<Vec<String>>,
}

impl MockQuoteSource {
    pub fn new() -> Self {
        Self {
            payloads: HashMap::new(),
            failing: Vec::new(),
            fetch_log: Mutex::new(Vec::new()),
        }
    }

    pub fn with_payload(mut self, symbol: &str, payload: &str) -> Self {
        self.payloads.insert(symbol.to_string(), payload.to_string());
        self
    }

    pub fn with_failure(mut self, symbol: &str) -> Self {
        self.failing.push(symbol.to_string());
        self
    }

    /// Symbols fetched so far, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetch_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn fetch_raw(&self, symbol: &str) -> Result<String> {
        self.fetch_log.lock().unwrap().push(symbol.to_string());

        if self.failing.iter().any(|s| s == symbol) {
            return Err(anyhow!("simulated transport failure for {symbol}"));
        }

        self.payloads
            .get(symbol)
            .cloned()
            .ok_or_else(|| anyhow!("no payload for {symbol}"))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// A mock alert sink recording every delivered payload.
pub struct MockAlertSink {
    delivered: Mutex<Vec<String>>,
    fail: bool,
}

impl MockAlertSink {
    pub fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A sink whose deliveries always fail.
    pub fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn deliveries(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSink for MockAlertSink {
    async fn deliver(&self, content: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("simulated delivery failure"));
        }
        self.delivered.lock().unwrap().push(content.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock-sink"
    }
}

/// Build a payload in the shape the quote endpoint returns.
pub fn quote_payload(
    symbol: &str,
    previous_close: f64,
    change: f64,
    volume: f64,
    percent_change: f64,
    average_volume: f64,
) -> String {
    format!(
        r#"{{"symbol":"{symbol}","exchange":"NASDAQ","previous_close":"{previous_close}","change":"{change}","percent_change":"{percent_change}","volume":"{volume}","average_volume":"{average_volume}"}}"#
    )
}

/// A payload carrying the upstream error marker.
pub fn error_payload() -> String {
    r#"{"code":429,"message":"You have run out of API credits","status":"error"}"#.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_payload() {
        let source = MockQuoteSource::new()
            .with_payload("AAPL", &quote_payload("AAPL", 10.0, 1.0, 100.0, 1.0, 50.0));
        let payload = source.fetch_raw("AAPL").await.unwrap();
        assert!(payload.contains("\"previous_close\":\"10\""));
    }

    #[tokio::test]
    async fn test_mock_forced_failure() {
        let source = MockQuoteSource::new().with_failure("AAPL");
        assert!(source.fetch_raw("AAPL").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_unknown_symbol_fails() {
        let source = MockQuoteSource::new();
        assert!(source.fetch_raw("ZZZZ").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_records_fetch_order() {
        let source = MockQuoteSource::new().with_failure("A").with_failure("B");
        let _ = source.fetch_raw("A").await;
        let _ = source.fetch_raw("B").await;
        let _ = source.fetch_raw("A").await;
        assert_eq!(source.fetched(), vec!["A", "B", "A"]);
    }

    #[tokio::test]
    async fn test_mock_sink_records_deliveries() {
        let sink = MockAlertSink::new();
        sink.deliver("hello").await.unwrap();
        assert_eq!(sink.deliveries(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_failing_sink_records_nothing() {
        let sink = MockAlertSink::failing();
        assert!(sink.deliver("hello").await.is_err());
        assert!(sink.deliveries().is_empty());
    }
}
