//! Alert rendering and payload sanitization.
//!
//! Two renderings of the same cycle result: a multi-line console block
//! and a single-entity delivery payload whose line breaks are escaped
//! for a transport that forbids raw newlines inside a text field.

use crate::types::CycleResult;

/// Upper bound on the sanitized delivery payload, in bytes.
pub const MAX_PAYLOAD_LEN: usize = 1000;

/// Bytes reserved at the tail of the payload buffer so the transport
/// always has room for a terminating marker.
pub const PAYLOAD_TAIL_MARGIN: usize = 5;

/// A rendered alert: the console block and the transport payload.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub console_report: String,
    pub delivery_payload: String,
}

/// Render the multi-line console block for a cycle result.
pub fn render_report(result: &CycleResult) -> String {
    let q = &result.quote;
    format!(
        "===== {} =====\n\
         Ticker: {}\n\
         Price: {:.2}\n\
         Change: {:.4}%\n\
         Volume: {:.0}\n\
         Relative Volume: {:.4}\n\
         Directional Flow: {:.4}\n",
        result.direction, q.symbol, q.price, q.percent_change, q.volume, q.relative_volume, q.flow_score,
    )
}

/// Render the delivery text (same information, compact labels).
fn render_delivery(result: &CycleResult) -> String {
    let q = &result.quote;
    format!(
        "{}\n\
         Ticker: {}\n\
         Price: {:.2}\n\
         Change: {:.4}%\n\
         Volume: {:.0}\n\
         RVol: {:.4}\n\
         Directional Flow: {:.4}",
        result.direction, q.symbol, q.price, q.percent_change, q.volume, q.relative_volume, q.flow_score,
    )
}

/// Replace every line break with the two-character literal `\n` and
/// bound the result to `MAX_PAYLOAD_LEN - PAYLOAD_TAIL_MARGIN` bytes.
/// Truncates silently — never errors, never emits half an escape pair.
pub fn sanitize_for_delivery(text: &str) -> String {
    let limit = MAX_PAYLOAD_LEN - PAYLOAD_TAIL_MARGIN;
    let mut out = String::with_capacity(text.len().min(limit));

    for ch in text.chars() {
        let width = if ch == '\n' { 2 } else { ch.len_utf8() };
        if out.len() + width > limit {
            break;
        }
        if ch == '\n' {
            out.push('\\');
            out.push('n');
        } else {
            out.push(ch);
        }
    }

    out
}

/// Build the full alert for a cycle result.
pub fn build_alert(result: &CycleResult) -> AlertMessage {
    AlertMessage {
        console_report: render_report(result),
        delivery_payload: sanitize_for_delivery(&render_delivery(result)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
