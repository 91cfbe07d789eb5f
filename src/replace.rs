//! Literal substring replacement.
//!
//! [`replace`] substitutes every occurrence; [`replace_n`] caps the number of
//! substitutions. Matches are literal, found left to right, and
//! non-overlapping: each match consumes the full pattern length before the
//! search resumes.
//!
//! ## Examples
//!
//! ```rust
//! use strkit::{replace, replace_n};
//!
//! assert_eq!(replace("xooxoox", "oo", "ee"), "xeexeex");
//! assert_eq!(replace_n("xooxoox", "oo", "ee", 1), "xeexoox");
//! ```

/// Replaces every occurrence of `from` in `input` with `to`.
///
/// The input is never mutated; the result is freshly allocated with all
/// unmatched bytes copied unchanged. An empty `from` returns the input
/// as-is rather than inserting `to` at every position.
///
/// # Examples
///
/// ```rust
/// use strkit::replace;
///
/// assert_eq!(replace("a-b-c", "-", "::"), "a::b::c");
/// assert_eq!(replace("unchanged", "zz", "!"), "unchanged");
/// assert_eq!(replace("abc", "", "!"), "abc");
/// ```
#[must_use]
pub fn replace(input: &str, from: &str, to: &str) -> String {
    replace_n(input, from, to, 0)
}

/// Replaces up to `max` occurrences of `from` in `input` with `to`.
///
/// `max == 0` means unlimited. Occurrences are counted left to right;
/// once the cap is reached the rest of the input is copied verbatim.
///
/// # Examples
///
/// ```rust
/// use strkit::replace_n;
///
/// assert_eq!(replace_n("aaaa", "a", "b", 2), "bbaa");
/// ```
#[must_use]
pub fn replace_n(input: &str, from: &str, to: &str, max: u32) -> String {
    if from.is_empty() {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len());
    let mut start = 0;
    let mut done = 0u32;
    while let Some(at) = input[start..].find(from).map(|i| start + i) {
        if max != 0 && done == max {
            break;
        }
        out.push_str(&input[start..at]);
        out.push_str(to);
        start = at + from.len();
        done += 1;
    }
    out.push_str(&input[start..]);
    out
}
