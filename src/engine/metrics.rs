//! Per-symbol metric derivation.
//!
//! Takes a raw quote payload, pulls the five wire-contract fields out
//! of it, enforces the validity precondition, and produces a
//! `SymbolQuote` with price, relative volume, and flow score computed.

use crate::extract::{FieldSource, SubstringFieldSource};
use crate::types::{QuoteError, SymbolQuote};

// ---------------------------------------------------------------------------
// Wire contract with the upstream source
// ---------------------------------------------------------------------------

// Field keys are matched with their surrounding quotes to reduce the
// chance of a bare substring hit elsewhere in the payload. An upstream
// rename breaks extraction silently (fields default to 0).
const KEY_PREVIOUS_CLOSE: &str = "\"previous_close\"";
const KEY_CHANGE: &str = "\"change\"";
const KEY_VOLUME: &str = "\"volume\"";
const KEY_PERCENT_CHANGE: &str = "\"percent_change\"";
const KEY_AVERAGE_VOLUME: &str = "\"average_volume\"";

/// Literal marker the upstream source embeds when it reports a failure
/// for a request.
const ERROR_MARKER: &str = "\"status\":\"error\"";

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive a `SymbolQuote` from a raw payload.
///
/// Fails when the payload carries the upstream error marker or when
/// `average_volume <= 0` (no usable history to rank against — this
/// also guards the relative-volume division). Everything else passes
/// through: absent fields read as `0.0`.
pub fn derive_quote(payload: &str, symbol: &str) -> Result<SymbolQuote, QuoteError> {
    if payload.contains(ERROR_MARKER) {
        return Err(QuoteError::UpstreamError);
    }
    derive_quote_from(&SubstringFieldSource::new(payload), symbol)
}

/// Derive a `SymbolQuote` from any `FieldSource`.
///
/// Absent fields fold to `0.0`, so an absent `average_volume` fails
/// the precondition the same way a zero one does.
pub fn derive_quote_from(
    source: &dyn FieldSource,
    symbol: &str,
) -> Result<SymbolQuote, QuoteError> {
    let field = |key: &str| source.get(key).unwrap_or(0.0);

    let previous_close = field(KEY_PREVIOUS_CLOSE);
    let change = field(KEY_CHANGE);
    let volume = field(KEY_VOLUME);
    let percent_change = field(KEY_PERCENT_CHANGE);
    let average_volume = field(KEY_AVERAGE_VOLUME);

    if average_volume <= 0.0 {
        return Err(QuoteError::NoVolumeHistory);
    }

    Ok(SymbolQuote::from_fields(
        symbol,
        previous_close,
        change,
        volume,
        percent_change,
        average_volume,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
