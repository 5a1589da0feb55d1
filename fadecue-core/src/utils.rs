//! Numeric helpers for probe output and document values.
//!
//! Probe fields arrive as strings. Every parser here is total: malformed or
//! missing input yields `0.0`, never an error.

/// Parses a frame rate such as `"30000/1001"`, `"25/1"` or `"29.97"`.
///
/// A zero denominator, an unparseable rational, or an empty value yields 0.0.
#[must_use]
pub fn parse_frame_rate(raw: Option<&str>) -> f64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0.0;
    };

    if let Some((num, den)) = raw.split_once('/') {
        return match (num.trim().parse::<f64>(), den.trim().parse::<f64>()) {
            (Ok(n), Ok(d)) if d != 0.0 => sanitize(n / d),
            _ => 0.0,
        };
    }

    parse_number(Some(raw))
}

/// Parses a plain real number, returning 0.0 when absent or malformed.
#[must_use]
pub fn parse_number(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .map(sanitize)
        .unwrap_or(0.0)
}

/// Rounds to three decimal places.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// Statistics are non-negative; NaN and infinities collapse to zero too.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
