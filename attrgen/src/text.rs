//! Textual encodings for opaque leaf types.
//!
//! Durations and timestamps have no structure in an attribute schema; they
//! travel as strings. The encodings here are lossless: parsing the output of
//! a `format_*` function always yields the original value.
//!
//! ## Durations
//!
//! A duration is a sequence of decimal numbers with unit suffixes, such as
//! `"1h30m"`, `"2.5s"` or `"250ms"`. Accepted units are `ns`, `us` (or `µs`),
//! `ms`, `s`, `m` and `h`. The bare string `"0"` is also accepted.
//!
//! ```
//! use std::time::Duration;
//! use attrgen::text::{format_duration, parse_duration};
//!
//! assert_eq!(format_duration(Duration::from_secs(5400)), "1h30m");
//! assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
//! assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
//! ```
//!
//! ## Timestamps
//!
//! Timestamps use RFC 3339 in UTC with as many fractional digits as needed.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Longest fraction considered when parsing; further digits are below
/// nanosecond resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 18;

/// Errors from parsing the textual form of an opaque leaf value.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration '{input}'")]
    InvalidDuration { input: String },

    #[error("missing unit in duration '{input}'")]
    MissingUnit { input: String },

    #[error("unknown unit '{unit}' in duration '{input}'")]
    UnknownUnit { unit: String, input: String },

    #[error("duration '{input}' is out of range")]
    Overflow { input: String },

    #[error("invalid timestamp '{input}': {source}")]
    Timestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Renders a duration in its shortest unit-suffixed form.
pub fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }

    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    let nanos = duration.subsec_nanos();

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push_str(&format!("{seconds}.{}s", fraction.trim_end_matches('0')));
    } else if seconds > 0 {
        out.push_str(&format!("{seconds}s"));
    }
    out
}

/// Parses a duration produced by [`format_duration`] or written by hand.
///
/// ## Errors
///
/// Returns a [`ParseError`] when the text is empty, a number has no unit,
/// a unit is unknown, or the value does not fit in a [`Duration`].
pub fn parse_duration(text: &str) -> Result<Duration, ParseError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut rest = input;
    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| ParseError::MissingUnit {
                input: input.to_string(),
            })?;
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let scale = unit_nanos(unit).ok_or_else(|| ParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;
        let nanos = scale_number(number, scale, input)?;
        total = total.checked_add(nanos).ok_or_else(|| ParseError::Overflow {
            input: input.to_string(),
        })?;
        rest = next;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| ParseError::Overflow {
        input: input.to_string(),
    })?;
    // The remainder is always below one billion.
    let nanos = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, nanos))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn scale_number(number: &str, scale: u128, input: &str) -> Result<u128, ParseError> {
    let invalid = || ParseError::InvalidDuration {
        input: input.to_string(),
    };
    let overflow = || ParseError::Overflow {
        input: input.to_string(),
    };

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let digits: u128 = fraction.parse().map_err(|_| invalid())?;
        let divisor = 10u128.pow(fraction.len() as u32);
        nanos = nanos
            .checked_add(digits * scale / divisor)
            .ok_or_else(overflow)?;
    }
    Ok(nanos)
}

/// Renders a timestamp as RFC 3339 in UTC.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses an RFC 3339 timestamp, converting any offset to UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| ParseError::Timestamp {
            input: text.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_zero_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }

    #[test]
    fn format_skips_empty_components() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_duration(Duration::from_secs(3605)), "1h5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
    }

    #[test]
    fn format_sub_second_durations() {
        assert_eq!(format_duration(Duration::from_millis(250)), "0.25s");
        assert_eq!(format_duration(Duration::from_nanos(1)), "0.000000001s");
        assert_eq!(format_duration(Duration::new(61, 500_000_000)), "1m1.5s");
    }

    #[test]
    fn parse_combined_units() {
        assert_eq!(
            parse_duration("1h2m3s").unwrap(),
            Duration::from_secs(3600 + 120 + 3)
        );
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("10us").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("10µs").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn parse_bare_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(parse_duration(""), Err(ParseError::Empty)));
        assert!(matches!(parse_duration("5"), Err(ParseError::MissingUnit { .. })));
        assert!(matches!(
            parse_duration("5 days"),
            Err(ParseError::UnknownUnit { .. })
        ));
        assert!(matches!(parse_duration("s"), Err(ParseError::InvalidDuration { .. })));
        assert!(matches!(
            parse_duration("1.2.3s"),
            Err(ParseError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        let huge = format!("{}h", u64::MAX);
        assert!(matches!(parse_duration(&huge), Err(ParseError::Overflow { .. })));
    }

    #[test]
    fn duration_text_is_lossless() {
        let samples = [
            Duration::ZERO,
            Duration::from_nanos(1),
            Duration::from_millis(1500),
            Duration::new(86_400 * 3 + 17, 123_456_789),
            Duration::new(u64::MAX, 999_999_999),
        ];
        for duration in samples {
            let text = format_duration(duration);
            assert_eq!(parse_duration(&text).unwrap(), duration, "via {text}");
        }
    }

    #[test]
    fn timestamp_text_is_lossless() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 0).unwrap()
            + chrono::Duration::nanoseconds(42);
        let text = format_timestamp(&ts);
        assert_eq!(parse_timestamp(&text).unwrap(), ts);
    }

    #[test]
    fn timestamp_offsets_normalize_to_utc() {
        let parsed = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn invalid_timestamp_is_an_error() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
