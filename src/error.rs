//! Error types for strict token parsing.
//!
//! Parsing is the only fallible corner of this crate. Splitting, replacement,
//! trimming, concatenation, and debug rendering all degrade gracefully on
//! degenerate input and never produce an error.
//!
//! ## Error Categories
//!
//! - **Format errors**: the token does not match the numeric/boolean grammar
//!   (empty input, bare sign, trailing junk, unknown boolean word)
//! - **Range errors**: the token is a well-formed numeral whose magnitude does
//!   not fit the target type
//!
//! ## Two ways to observe failure
//!
//! The [`FromToken`](crate::FromToken) API returns `Result` values directly.
//! The C-style wrappers (`to_int32` and friends) instead return the target
//! type's zero value and record the outcome in a thread-local signal read
//! back through [`get_error`].
//!
//! ## Examples
//!
//! ```rust
//! use strkit::{parse, ParseError};
//!
//! assert_eq!(parse::<i32>("12a"), Err(ParseError::InvalidFormat));
//! assert_eq!(parse::<i32>("2147483648"), Err(ParseError::OutOfRange));
//! ```

use std::cell::Cell;
use thiserror::Error;

/// Classification of a failed token parse.
///
/// The two kinds mirror the classic `EINVAL`/`ERANGE` split: a token is either
/// not shaped like a numeral at all, or shaped correctly but too large (or too
/// negative) for the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not match the required grammar.
    #[error("invalid format")]
    InvalidFormat,

    /// A syntactically valid numeral whose magnitude exceeds the target
    /// type's representable range.
    #[error("value out of range")]
    OutOfRange,
}

/// Crate-wide result alias for fallible parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

thread_local! {
    static LAST_ERROR: Cell<Option<ParseError>> = const { Cell::new(None) };
}

/// Records the outcome of the most recent C-style conversion on this thread.
///
/// `None` marks success. The `to_*` wrappers in [`mod@crate::parse`] call
/// this on every conversion; callers normally only need [`get_error`].
pub fn set_error(err: Option<ParseError>) {
    LAST_ERROR.with(|slot| slot.set(err));
}

/// Returns the outcome of the most recent C-style conversion on this thread.
///
/// Every `to_*` call overwrites the signal, success included, so a stale
/// error from an earlier conversion is never observable. The signal is
/// thread-local: conversions on other threads do not affect it.
///
/// # Examples
///
/// ```rust
/// use strkit::{get_error, to_int32, ParseError};
///
/// assert_eq!(to_int32("12a"), 0);
/// assert_eq!(get_error(), Some(ParseError::InvalidFormat));
///
/// assert_eq!(to_int32("0"), 0);
/// assert_eq!(get_error(), None); // a real zero, not a failure
/// ```
#[must_use]
pub fn get_error() -> Option<ParseError> {
    LAST_ERROR.with(|slot| slot.get())
}
