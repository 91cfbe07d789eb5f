//! Character-set trimming.
//!
//! [`trim`] removes the default whitespace set (`" \t\r\n"`) from both ends;
//! [`trim_with`] takes an explicit character set and a [`Direction`].
//! [`strip`] is an alias for `trim_with`, kept for callers used to that name.
//!
//! Matching is by set membership, not position: any leading and/or trailing
//! run of characters found in the set is removed, while interior occurrences
//! are preserved. The result borrows from the input; nothing is copied or
//! mutated.
//!
//! ## Examples
//!
//! ```rust
//! use strkit::{trim, trim_with, Direction};
//!
//! assert_eq!(trim(" xx\r\n"), "xx");
//! assert_eq!(trim_with("abxxa", "ab", Direction::Both), "xx");
//! assert_eq!(trim_with("abxxa", "ab", Direction::Left), "xxa");
//! assert_eq!(trim_with("abxxa", "ab", Direction::Right), "abxx");
//! ```

mod sealed {
    pub trait Sealed {}
    impl Sealed for char {}
    impl Sealed for &str {}
}

/// Which end(s) of the string to trim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Leading characters only.
    Left,
    /// Trailing characters only.
    Right,
    /// Both ends.
    #[default]
    Both,
}

/// A trim character set: a single `char` or the characters of a `&str`.
///
/// Sealed; membership is per character, so `"ab"` trims `'a'`s and `'b'`s
/// in any order rather than the literal sequence `"ab"`.
pub trait CharSet: sealed::Sealed + Copy {
    /// True if `ch` belongs to the set.
    fn holds(self, ch: char) -> bool;
}

impl CharSet for char {
    fn holds(self, ch: char) -> bool {
        self == ch
    }
}

impl CharSet for &str {
    fn holds(self, ch: char) -> bool {
        self.contains(ch)
    }
}

/// Trims the default whitespace set (`' '`, `'\t'`, `'\r'`, `'\n'`) from
/// both ends of `input`.
///
/// # Examples
///
/// ```rust
/// use strkit::trim;
///
/// assert_eq!(trim("  hello world \r\n"), "hello world");
/// assert_eq!(trim("bare"), "bare");
/// ```
#[must_use]
pub fn trim(input: &str) -> &str {
    trim_with(input, " \t\r\n", Direction::Both)
}

/// Trims any run of characters from `set` off the end(s) of `input`
/// selected by `direction`.
///
/// Idempotent: trimming an already-trimmed string with the same set and
/// direction returns it unchanged. An input with no matching boundary
/// characters comes back whole.
///
/// # Examples
///
/// ```rust
/// use strkit::{trim_with, Direction};
///
/// assert_eq!(trim_with("xxhixx", 'x', Direction::Both), "hi");
/// assert_eq!(trim_with("a-b-a", "a", Direction::Both), "-b-");
/// ```
#[must_use]
pub fn trim_with<C: CharSet>(input: &str, set: C, direction: Direction) -> &str {
    let mut out = input;
    if matches!(direction, Direction::Left | Direction::Both) {
        out = out.trim_start_matches(|ch| set.holds(ch));
    }
    if matches!(direction, Direction::Right | Direction::Both) {
        out = out.trim_end_matches(|ch| set.holds(ch));
    }
    out
}

/// Alias for [`trim_with`].
#[must_use]
pub fn strip<C: CharSet>(input: &str, set: C, direction: Direction) -> &str {
    trim_with(input, set, direction)
}
