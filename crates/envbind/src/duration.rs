//! Compact duration syntax.
//!
//! Accepts a sequence of decimal numbers, each with an optional fraction and
//! a mandatory unit suffix, such as `"300ms"`, `"1.5h"` or `"2h45m"`. Valid
//! units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`. A leading
//! `+` is accepted, and the bare string `"0"` needs no unit.
//!
//! [`Duration`] cannot be negative, so a leading `-` is only accepted when the
//! total is zero. Totals are capped at `i64::MAX` nanoseconds (~292 years).

use std::time::Duration;

use thiserror::Error as ThisError;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Largest representable total, in nanoseconds.
const MAX_NANOS: u128 = i64::MAX as u128;

/// Fraction digits beyond this precision cannot change the result.
const MAX_FRACTION_DIGITS: usize = 18;

/// Errors produced by [`parse_duration`].
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DurationError {
    /// The input does not follow the duration grammar.
    #[error("invalid duration {0:?}")]
    Invalid(String),

    /// A number was not followed by a unit.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    /// A unit suffix was not recognised.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognised suffix.
        unit: String,

        /// The full input.
        input: String,
    },

    /// The total exceeds the representable range.
    #[error("duration {0:?} is out of range")]
    Overflow(String),

    /// The total is below zero.
    #[error("duration {0:?} is negative")]
    Negative(String),
}

/// Parses a duration string such as `"1h30m"` or `"9s"`.
///
/// # Errors
///
/// Returns a [`DurationError`] describing the first problem in `input`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use envbind::duration::parse_duration;
///
/// assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_duration("1.5ms").unwrap(), Duration::from_micros(1500));
/// assert!(parse_duration("3").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    if rest.is_empty() {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let mut total: u128 = 0;

    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);

        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after_whole),
        };

        let has_dot = after_whole.len() != after_number.len();
        if whole.is_empty() && (!has_dot || fraction.is_empty()) {
            return Err(DurationError::Invalid(input.to_string()));
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());

        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }

        let (unit, tail) = after_number.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let overflow = || DurationError::Overflow(input.to_string());

        let mut value = parse_whole(whole)
            .and_then(|w| w.checked_mul(scale))
            .ok_or_else(overflow)?;

        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let numerator = parse_whole(digits).ok_or_else(overflow)?;
            let denominator = 10u128.pow(u32::try_from(digits.len()).map_err(|_| overflow())?);
            value = value
                .checked_add(numerator * scale / denominator)
                .ok_or_else(overflow)?;
        }

        total = total
            .checked_add(value)
            .filter(|t| *t <= MAX_NANOS)
            .ok_or_else(overflow)?;

        rest = tail;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(input.to_string()));
    }

    let nanos = u64::try_from(total).map_err(|_| DurationError::Overflow(input.to_string()))?;
    Ok(Duration::from_nanos(nanos))
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_whole(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
    })
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        // U+00B5 micro sign and U+03BC greek small letter mu
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_units() {
        assert_eq!(parse_duration("3s").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("7us").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7µs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("7μs").unwrap(), Duration::from_micros(7));
        assert_eq!(parse_duration("42ns").unwrap(), Duration::from_nanos(42));
    }

    #[test]
    fn test_compound_and_fractional() {
        assert_eq!(parse_duration("2h45m").unwrap(), Duration::from_secs(9900));
        assert_eq!(parse_duration("1h30m15s").unwrap(), Duration::from_secs(5415));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("1.s").unwrap(), Duration::from_secs(1));
        assert_eq!(
            parse_duration("0.000000001s").unwrap(),
            Duration::from_nanos(1)
        );
    }

    #[test]
    fn test_signs_and_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
        assert!(matches!(
            parse_duration("-5s"),
            Err(DurationError::Negative(_))
        ));
    }

    #[test]
    fn test_missing_unit() {
        assert!(matches!(
            parse_duration("3"),
            Err(DurationError::MissingUnit(_))
        ));
        assert!(matches!(
            parse_duration("1h30"),
            Err(DurationError::MissingUnit(_))
        ));
    }

    #[test]
    fn test_invalid_input() {
        for input in ["", "-", "+", ".", "s", ".s", "1h-2m", " 1s"] {
            assert!(parse_duration(input).is_err(), "{input:?} should fail");
        }
    }

    #[test]
    fn test_unknown_unit() {
        let err = parse_duration("3d").unwrap_err();
        assert_eq!(
            err,
            DurationError::UnknownUnit {
                unit: "d".to_string(),
                input: "3d".to_string(),
            }
        );
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            parse_duration("9999999999999999999h"),
            Err(DurationError::Overflow(_))
        ));
        assert!(matches!(
            parse_duration("2562048h"),
            Err(DurationError::Overflow(_))
        ));
        assert!(parse_duration("2562047h").is_ok());
    }
}
