//! Strict string-to-number and string-to-bool conversion.
//!
//! Two surfaces cover the same grammar:
//!
//! - [`FromToken`] / [`parse`] return a `Result` and are the preferred API.
//! - The C-style wrappers ([`to_bool`], [`to_int32`], [`to_int64`],
//!   [`to_uint32`], [`to_uint64`], [`to_double`]) return the target type's
//!   zero value on failure and record the outcome in the thread-local signal
//!   behind [`get_error`](crate::get_error). Since zero is also a legal
//!   parse result, callers of the wrappers must consult the signal whenever
//!   the return value alone is ambiguous.
//!
//! Validation is strict and total: the whole token must match the grammar.
//! Trailing junk, interior whitespace, an empty token, or a bare sign are
//! format errors; a well-formed numeral outside the target range is a range
//! error and never wraps or saturates.
//!
//! ## Grammar
//!
//! - signed integers: optional `+`/`-`, then one or more decimal digits
//! - unsigned integers: decimal digits only — no sign of either kind
//! - `f64`: optional sign, decimal digits with optional fractional part and
//!   optional decimal exponent; alphabetic spellings (`inf`, `nan`, hex
//!   floats) are rejected
//! - `bool`: exactly `"true"` or `"1"` for true, `"false"` or `"0"` for
//!   false
//!
//! ## Examples
//!
//! ```rust
//! use strkit::{parse, to_int32, get_error, ParseError};
//!
//! assert_eq!(parse::<i32>("-42"), Ok(-42));
//! assert_eq!(parse::<u32>("-42"), Err(ParseError::InvalidFormat));
//! assert_eq!(parse::<f64>("2.5e3"), Ok(2500.0));
//!
//! assert_eq!(to_int32("2147483648"), 0);
//! assert_eq!(get_error(), Some(ParseError::OutOfRange));
//! ```

use std::num::IntErrorKind;

use crate::error::{set_error, ParseError, Result};

/// Types that can be parsed from a complete textual token.
///
/// Implemented for `i32`, `i64`, `u32`, `u64`, `f64`, and `bool`. The whole
/// input must match the type's grammar; partial consumption is never
/// performed.
pub trait FromToken: Sized {
    /// Parses `token` in its entirety, or classifies why it cannot be.
    fn from_token(token: &str) -> Result<Self>;
}

/// Parses a complete token into `T`.
///
/// Thin generic front for [`FromToken::from_token`], useful with turbofish:
///
/// ```rust
/// use strkit::parse;
///
/// assert_eq!(parse::<u64>("18446744073709551615"), Ok(u64::MAX));
/// assert!(parse::<bool>("yes").is_err());
/// ```
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] for grammar violations,
/// [`ParseError::OutOfRange`] for well-formed numerals outside `T`'s range.
pub fn parse<T: FromToken>(token: &str) -> Result<T> {
    T::from_token(token)
}

fn classify_int_error(kind: &IntErrorKind) -> ParseError {
    match kind {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange,
        _ => ParseError::InvalidFormat,
    }
}

macro_rules! impl_from_token_signed {
    ($($ty:ty),+) => {$(
        impl FromToken for $ty {
            fn from_token(token: &str) -> Result<Self> {
                token
                    .parse::<$ty>()
                    .map_err(|e| classify_int_error(e.kind()))
            }
        }
    )+};
}

macro_rules! impl_from_token_unsigned {
    ($($ty:ty),+) => {$(
        impl FromToken for $ty {
            fn from_token(token: &str) -> Result<Self> {
                // std accepts a leading '+' for unsigned types; the grammar
                // grants signs to signed kinds only.
                if token.starts_with(['+', '-']) {
                    return Err(ParseError::InvalidFormat);
                }
                token
                    .parse::<$ty>()
                    .map_err(|e| classify_int_error(e.kind()))
            }
        }
    )+};
}

impl_from_token_signed!(i32, i64);
impl_from_token_unsigned!(u32, u64);

impl FromToken for f64 {
    fn from_token(token: &str) -> Result<Self> {
        // Keep the grammar purely numeric: std would also accept "inf",
        // "infinity", and "NaN" in any casing.
        if token
            .chars()
            .any(|ch| ch.is_alphabetic() && !matches!(ch, 'e' | 'E'))
        {
            return Err(ParseError::InvalidFormat);
        }
        let value = token
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidFormat)?;
        // A finite literal that rounds to infinity overflowed f64's range.
        if value.is_infinite() {
            return Err(ParseError::OutOfRange);
        }
        Ok(value)
    }
}

impl FromToken for bool {
    fn from_token(token: &str) -> Result<Self> {
        match token {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ParseError::InvalidFormat),
        }
    }
}

fn convert<T: FromToken + Default>(token: &str) -> T {
    match T::from_token(token) {
        Ok(value) => {
            set_error(None);
            value
        }
        Err(err) => {
            set_error(Some(err));
            T::default()
        }
    }
}

/// Converts `token` to `bool`, or returns `false` and sets the error signal.
///
/// Accepted vocabulary: `"true"`, `"1"`, `"false"`, `"0"`. Everything else
/// is a format error.
///
/// # Examples
///
/// ```rust
/// use strkit::{to_bool, get_error};
///
/// assert!(to_bool("true"));
/// assert!(!to_bool("0"));
/// assert_eq!(get_error(), None);
///
/// assert!(!to_bool("maybe"));
/// assert!(get_error().is_some());
/// ```
#[must_use = "on failure this returns false and only the error signal distinguishes it"]
pub fn to_bool(token: &str) -> bool {
    convert(token)
}

/// Converts `token` to `i32`, or returns `0` and sets the error signal.
#[must_use = "on failure this returns 0 and only the error signal distinguishes it"]
pub fn to_int32(token: &str) -> i32 {
    convert(token)
}

/// Converts `token` to `i64`, or returns `0` and sets the error signal.
#[must_use = "on failure this returns 0 and only the error signal distinguishes it"]
pub fn to_int64(token: &str) -> i64 {
    convert(token)
}

/// Converts `token` to `u32`, or returns `0` and sets the error signal.
#[must_use = "on failure this returns 0 and only the error signal distinguishes it"]
pub fn to_uint32(token: &str) -> u32 {
    convert(token)
}

/// Converts `token` to `u64`, or returns `0` and sets the error signal.
#[must_use = "on failure this returns 0 and only the error signal distinguishes it"]
pub fn to_uint64(token: &str) -> u64 {
    convert(token)
}

/// Converts `token` to `f64`, or returns `0.0` and sets the error signal.
#[must_use = "on failure this returns 0.0 and only the error signal distinguishes it"]
pub fn to_double(token: &str) -> f64 {
    convert(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::get_error;

    #[test]
    fn test_parse_signed_in_range() {
        assert_eq!(parse::<i32>("0"), Ok(0));
        assert_eq!(parse::<i32>("-2147483648"), Ok(i32::MIN));
        assert_eq!(parse::<i32>("2147483647"), Ok(i32::MAX));
        assert_eq!(parse::<i64>("+7"), Ok(7));
    }

    #[test]
    fn test_parse_signed_overflow() {
        assert_eq!(parse::<i32>("2147483648"), Err(ParseError::OutOfRange));
        assert_eq!(parse::<i32>("-2147483649"), Err(ParseError::OutOfRange));
        assert_eq!(
            parse::<i64>("9223372036854775808"),
            Err(ParseError::OutOfRange)
        );
    }

    #[test]
    fn test_parse_unsigned_rejects_signs() {
        assert_eq!(parse::<u32>("+1"), Err(ParseError::InvalidFormat));
        assert_eq!(parse::<u32>("-1"), Err(ParseError::InvalidFormat));
        assert_eq!(parse::<u64>("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(
            parse::<u64>("18446744073709551616"),
            Err(ParseError::OutOfRange)
        );
    }

    #[test]
    fn test_parse_malformed_integers() {
        for bad in ["", "12a", "--3", "+", "-", "1 2", " 1", "1_000", "0x10"] {
            assert_eq!(parse::<i32>(bad), Err(ParseError::InvalidFormat), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_double() {
        assert_eq!(parse::<f64>("3.25"), Ok(3.25));
        assert_eq!(parse::<f64>("-0.5"), Ok(-0.5));
        assert_eq!(parse::<f64>("2.5e3"), Ok(2500.0));
        assert_eq!(parse::<f64>("1E-2"), Ok(0.01));
    }

    #[test]
    fn test_parse_double_rejects_words() {
        for bad in ["inf", "-inf", "infinity", "nan", "NaN", "0x1p3", ""] {
            assert_eq!(parse::<f64>(bad), Err(ParseError::InvalidFormat), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_double_overflow() {
        assert_eq!(parse::<f64>("1e400"), Err(ParseError::OutOfRange));
        assert_eq!(parse::<f64>("-1e400"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn test_parse_double_underflow_is_zero() {
        assert_eq!(parse::<f64>("1e-400"), Ok(0.0));
    }

    #[test]
    fn test_parse_bool_vocabulary() {
        assert_eq!(parse::<bool>("true"), Ok(true));
        assert_eq!(parse::<bool>("1"), Ok(true));
        assert_eq!(parse::<bool>("false"), Ok(false));
        assert_eq!(parse::<bool>("0"), Ok(false));
        for bad in ["TRUE", "yes", "on", "2", ""] {
            assert_eq!(
                parse::<bool>(bad),
                Err(ParseError::InvalidFormat),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_wrappers_signal_success() {
        assert_eq!(to_int32("41"), 41);
        assert_eq!(get_error(), None);
        assert!((to_double("1.5") - 1.5).abs() < f64::EPSILON);
        assert_eq!(get_error(), None);
    }

    #[test]
    fn test_wrappers_zero_on_failure() {
        assert_eq!(to_int32("12a"), 0);
        assert_eq!(get_error(), Some(ParseError::InvalidFormat));
        assert_eq!(to_uint64("-1"), 0);
        assert_eq!(get_error(), Some(ParseError::InvalidFormat));
        assert_eq!(to_int32("2147483648"), 0);
        assert_eq!(get_error(), Some(ParseError::OutOfRange));
        assert!(!to_bool("flase"));
        assert_eq!(get_error(), Some(ParseError::InvalidFormat));
    }

    #[test]
    fn test_wrapper_success_clears_stale_error() {
        assert_eq!(to_int32("oops"), 0);
        assert_eq!(get_error(), Some(ParseError::InvalidFormat));
        assert_eq!(to_int32("0"), 0);
        assert_eq!(get_error(), None);
    }
}
