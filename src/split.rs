//! Delimiter-based string splitting.
//!
//! [`split`] partitions a string around every occurrence of a delimiter;
//! [`split_n`] additionally caps the number of cuts, leaving the remainder
//! (further delimiters included) as the final element.
//!
//! The delimiter is either a single `char` or a literal `&str`, resolved
//! statically through the [`Delim`] trait. A multi-character delimiter is
//! matched as a literal substring, never as a character class.
//!
//! ## Examples
//!
//! ```rust
//! use strkit::{split, split_n};
//!
//! assert_eq!(split("x y z", ' '), vec!["x", "y", "z"]);
//! assert_eq!(split("|x|y|", '|'), vec!["", "x", "y", ""]);
//! assert_eq!(split("xooy", "oo"), vec!["x", "y"]);
//! assert_eq!(split_n("xooy", 'o', 1), vec!["x", "oy"]);
//! ```

mod sealed {
    pub trait Sealed {}
    impl Sealed for char {}
    impl Sealed for &str {}
}

/// A split/replace delimiter: a single `char` or a literal `&str`.
///
/// Sealed; implemented for exactly those two shapes so that dispatch stays
/// static and the matching rules stay literal.
pub trait Delim: sealed::Sealed + Copy {
    /// Finds the next occurrence at or after byte offset `from`, returning
    /// the match's byte offset together with its byte length.
    fn find_in(self, haystack: &str, from: usize) -> Option<(usize, usize)>;

    /// True for the degenerate empty-string delimiter.
    fn is_degenerate(self) -> bool;
}

impl Delim for char {
    fn find_in(self, haystack: &str, from: usize) -> Option<(usize, usize)> {
        haystack[from..]
            .find(self)
            .map(|at| (from + at, self.len_utf8()))
    }

    fn is_degenerate(self) -> bool {
        false
    }
}

impl Delim for &str {
    fn find_in(self, haystack: &str, from: usize) -> Option<(usize, usize)> {
        haystack[from..].find(self).map(|at| (from + at, self.len()))
    }

    fn is_degenerate(self) -> bool {
        self.is_empty()
    }
}

/// Splits `input` around every occurrence of `delim`.
///
/// The scan runs left to right; each match emits the substring since the
/// previous cut point, then resumes past the full delimiter. Leading and
/// trailing delimiters therefore produce empty elements, which makes joining
/// the result with the delimiter reproduce the input exactly.
///
/// An empty `&str` delimiter degenerates to a single-element result holding
/// the whole input; no cuts are invented between characters.
///
/// # Examples
///
/// ```rust
/// use strkit::split;
///
/// assert_eq!(split("a,b,,c", ','), vec!["a", "b", "", "c"]);
/// assert_eq!(split("nodelim", '|'), vec!["nodelim"]);
/// assert_eq!(split("", ','), vec![""]);
/// ```
#[must_use]
pub fn split<D: Delim>(input: &str, delim: D) -> Vec<String> {
    split_n(input, delim, 0)
}

/// Splits `input` around `delim`, making at most `max` cuts.
///
/// `max == 0` means unlimited. Once `max` cuts have been made the entire
/// remainder becomes the final element, any further delimiter occurrences
/// kept verbatim, so the result never holds more than `max + 1` elements.
///
/// # Examples
///
/// ```rust
/// use strkit::split_n;
///
/// assert_eq!(split_n("a:b:c", ':', 1), vec!["a", "b:c"]);
/// assert_eq!(split_n("a:b:c", ':', 9), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_n<D: Delim>(input: &str, delim: D, max: u32) -> Vec<String> {
    if delim.is_degenerate() {
        return vec![input.to_owned()];
    }

    let mut parts = Vec::new();
    let mut start = 0;
    let mut cuts = 0u32;
    while let Some((at, len)) = delim.find_in(input, start) {
        if max != 0 && cuts == max {
            break;
        }
        parts.push(input[start..at].to_owned());
        start = at + len;
        cuts += 1;
    }
    parts.push(input[start..].to_owned());
    parts
}
