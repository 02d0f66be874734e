//! Named numeric field extraction from semi-structured text payloads.
//!
//! The upstream quote feed returns JSON, but the only thing this bot
//! needs from it is a handful of scalar fields. `SubstringFieldSource`
//! pulls them out with a literal key scan: find the key, skip the
//! separator run, parse the leading number. It does not validate that
//! the match sits in a genuine key-value position — swapping in a real
//! structured decoder only requires another `FieldSource` impl.

/// Pluggable source of named numeric fields.
///
/// `None` means the key does not appear in the payload at all.
/// `Some(0.0)` is still ambiguous: the value may be genuinely zero or
/// may have failed to parse. Callers that fold `None` to `0.0` get the
/// historical conflated behavior.
pub trait FieldSource {
    fn get(&self, key: &str) -> Option<f64>;
}

/// `FieldSource` backed by a literal substring scan over a raw payload.
pub struct SubstringFieldSource<'a> {
    payload: &'a str,
}

impl<'a> SubstringFieldSource<'a> {
    pub fn new(payload: &'a str) -> Self {
        Self { payload }
    }
}

impl FieldSource for SubstringFieldSource<'_> {
    fn get(&self, key: &str) -> Option<f64> {
        let at = self.payload.find(key)?;
        let rest = &self.payload[at + key.len()..];
        // Skip the run of separator characters between key and value.
        let rest = rest.trim_start_matches([' ', ':', '"']);
        Some(parse_leading_number(rest))
    }
}

/// Extract a named numeric field from a payload, defaulting to `0.0`
/// when the key is absent. Callers must treat `0.0` as ambiguous
/// between "absent" and "legitimately zero".
pub fn extract_numeric_field(payload: &str, key: &str) -> f64 {
    SubstringFieldSource::new(payload).get(key).unwrap_or(0.0)
}

/// Parse the longest valid decimal-number prefix of `s`.
///
/// Accepts an optional sign, digits, a fractional part, and an
/// exponent. Stops at the first character that cannot extend a valid
/// number; an empty parse yields `0.0`.
fn parse_leading_number(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut saw_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut i = frac_start;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        // A bare "." with no digits on either side is not a number.
        if i > frac_start || saw_digits {
            saw_digits = saw_digits || i > frac_start;
            end = i;
        }
    }

    if !saw_digits {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut i = end + 1;
        if matches!(bytes.get(i), Some(&b'+') | Some(&b'-')) {
            i += 1;
        }
        let exp_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        // "1e" without exponent digits stops before the 'e'.
        if i > exp_start {
            end = i;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
