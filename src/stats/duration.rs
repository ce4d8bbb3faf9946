//! Compact human-readable duration strings ("1.5s", "2m0s", "12.345ms").
//! Used by: stats::snapshot.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();

    if nanos == 0 {
        return "0s".into();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{}ns", nanos);
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}{}µs", nanos / NANOS_PER_MICRO, fraction(nanos % NANOS_PER_MICRO, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}{}ms", nanos / NANOS_PER_MILLI, fraction(nanos % NANOS_PER_MILLI, 6));
    }

    let secs = nanos / NANOS_PER_SEC;
    let frac = fraction(nanos % NANOS_PER_SEC, 9);
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);

    if h > 0 {
        format!("{}h{}m{}{}s", h, m, s, frac)
    } else if m > 0 {
        format!("{}m{}{}s", m, s, frac)
    } else {
        format!("{}{}s", s, frac)
    }
}

/// Decimal fraction with trailing zeros dropped, empty when `value` is zero.
fn fraction(value: u128, digits: usize) -> String {
    if value == 0 {
        return String::new();
    }
    let padded = format!("{:0width$}", value, width = digits);
    format!(".{}", padded.trim_end_matches('0'))
}
