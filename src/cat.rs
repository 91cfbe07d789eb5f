//! Low-level concatenation primitives.
//!
//! [`append`] is the single fold step behind the [`cat!`](macro@crate::cat) macro:
//! it pushes one value's `Display` rendering onto a growable buffer, with no
//! separator, no quoting, and no recursion into container structure. The
//! debug formatter reuses it for scalar leaves.
//!
//! [`from`] renders one value to a fresh `String`.

use std::fmt::{Display, Write};

/// Appends `value`'s `Display` rendering to `out`.
///
/// # Examples
///
/// ```rust
/// use strkit::cat::append;
///
/// let mut s = String::new();
/// append(&mut s, "port ");
/// append(&mut s, 7777);
/// assert_eq!(s, "port 7777");
/// ```
pub fn append<T: Display>(out: &mut String, value: T) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{value}");
}

/// Renders one value to a fresh `String` via its `Display` impl.
///
/// # Examples
///
/// ```rust
/// assert_eq!(strkit::from(7777), "7777");
/// assert_eq!(strkit::from(3.25), "3.25");
/// assert_eq!(strkit::from('x'), "x");
/// ```
#[must_use]
pub fn from<T: Display>(value: T) -> String {
    let mut out = String::with_capacity(24);
    append(&mut out, value);
    out
}
