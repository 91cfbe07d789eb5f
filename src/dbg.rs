//! Canonical debug rendering for scalars, pairs, and containers.
//!
//! [`dbg`] produces a compact, bracketed textual form chosen by the shape of
//! the value, resolved statically through the [`Dbg`] trait:
//!
//! - string-like values (`str`, `String`, `Cow<str>`) render quoted, with no
//!   escaping: `"abc"`
//! - a pair `(K, V)` renders as `key:value` — a colon, no brackets
//! - sequence containers (slices, arrays, `Vec`, `VecDeque`) render as
//!   `[a,b,c]`
//! - set- and map-like containers (`BTreeSet`, `HashSet`, `BTreeMap`,
//!   `HashMap`, `IndexSet`, `IndexMap`) render as `{a,b,c}` /
//!   `{k:v,k:v}`
//! - every other scalar renders bare via its `Display` impl
//!
//! An empty container is just its bracket pair (`[]`, `{}`); there is never
//! a trailing comma. Elements appear in the container's natural iteration
//! order, so `HashMap`/`HashSet` output order is unspecified while
//! `IndexMap`/`IndexSet` preserve insertion order.
//!
//! Rendering recurses structurally, so nesting works to any depth:
//!
//! ```rust
//! use strkit::dbg;
//!
//! let routes = vec![("web", vec![80, 443]), ("dns", vec![53])];
//! assert_eq!(dbg(&routes), r#"["web":[80,443],"dns":[53]]"#);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use indexmap::{IndexMap, IndexSet};

use crate::cat::append;

/// A value with a canonical debug rendering.
///
/// The impl set is closed over the shapes the format distinguishes: quoted
/// string-likes, colon-joined pairs, bracketed containers, and bare scalars.
/// References delegate to their referent, so containers of references render
/// like containers of values.
pub trait Dbg {
    /// Appends this value's rendering to `out`.
    fn render(&self, out: &mut String);
}

/// Renders `value` to its canonical debug string.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use strkit::dbg;
///
/// assert_eq!(dbg(&vec![1, 2, 3]), "[1,2,3]");
/// assert_eq!(dbg(&(1, "a")), r#"1:"a""#);
///
/// let mut m = BTreeMap::new();
/// m.insert("x", 1);
/// assert_eq!(dbg(&m), r#"{"x":1}"#);
/// ```
#[must_use]
pub fn dbg<T: Dbg + ?Sized>(value: &T) -> String {
    let mut out = String::with_capacity(128);
    value.render(&mut out);
    out
}

impl<T: Dbg + ?Sized> Dbg for &T {
    fn render(&self, out: &mut String) {
        (**self).render(out);
    }
}

macro_rules! impl_dbg_scalar {
    ($($ty:ty),+) => {$(
        impl Dbg for $ty {
            fn render(&self, out: &mut String) {
                append(out, self);
            }
        }
    )+};
}

impl_dbg_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

impl Dbg for str {
    fn render(&self, out: &mut String) {
        out.push('"');
        out.push_str(self);
        out.push('"');
    }
}

impl Dbg for String {
    fn render(&self, out: &mut String) {
        self.as_str().render(out);
    }
}

impl Dbg for Cow<'_, str> {
    fn render(&self, out: &mut String) {
        self.as_ref().render(out);
    }
}

impl<K: Dbg, V: Dbg> Dbg for (K, V) {
    fn render(&self, out: &mut String) {
        self.0.render(out);
        out.push(':');
        self.1.render(out);
    }
}

fn render_seq<I>(items: I, open: char, close: char, out: &mut String)
where
    I: IntoIterator,
    I::Item: Dbg,
{
    out.push(open);
    let mut first = true;
    for item in items {
        if !first {
            out.push(',');
        }
        first = false;
        item.render(out);
    }
    out.push(close);
}

impl<T: Dbg> Dbg for [T] {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '[', ']', out);
    }
}

impl<T: Dbg, const N: usize> Dbg for [T; N] {
    fn render(&self, out: &mut String) {
        self.as_slice().render(out);
    }
}

impl<T: Dbg> Dbg for Vec<T> {
    fn render(&self, out: &mut String) {
        self.as_slice().render(out);
    }
}

impl<T: Dbg> Dbg for VecDeque<T> {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '[', ']', out);
    }
}

impl<T: Dbg> Dbg for BTreeSet<T> {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '{', '}', out);
    }
}

impl<T: Dbg, S> Dbg for HashSet<T, S> {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '{', '}', out);
    }
}

impl<T: Dbg, S> Dbg for IndexSet<T, S> {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '{', '}', out);
    }
}

impl<K: Dbg, V: Dbg> Dbg for BTreeMap<K, V> {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '{', '}', out);
    }
}

impl<K: Dbg, V: Dbg, S> Dbg for HashMap<K, V, S> {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '{', '}', out);
    }
}

impl<K: Dbg, V: Dbg, S> Dbg for IndexMap<K, V, S> {
    fn render(&self, out: &mut String) {
        render_seq(self.iter(), '{', '}', out);
    }
}
