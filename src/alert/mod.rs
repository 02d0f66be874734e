//! Outbound alerting.
//!
//! Defines the `AlertSink` trait, the report/payload rendering in
//! `format`, and the Discord webhook implementation in `discord`.

pub mod discord;
pub mod format;

use anyhow::Result;
use async_trait::async_trait;

/// Abstraction over alert delivery channels.
///
/// Delivery is best-effort: the scan loop logs a failure and moves on,
/// it never retries or aborts the cycle.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver a sanitized single-entity payload.
    async fn deliver(&self, content: &str) -> Result<()>;

    /// Sink name for logging and identification.
    fn name(&self) -> &str;
}
