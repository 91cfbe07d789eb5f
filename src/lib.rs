//! # strkit
//!
//! Small, allocation-conscious string utilities: delimiter splitting,
//! substring replacement, character trimming, strict token parsing, variadic
//! concatenation, and a canonical debug rendering for containers.
//!
//! ## Key Features
//!
//! - **Splitting**: single-`char` or literal-substring delimiters, with an
//!   optional cap on the number of cuts
//! - **Replacement**: literal, non-overlapping, left-to-right, with an
//!   optional cap on the number of substitutions
//! - **Trimming**: character-set based, directional, returns a borrowed
//!   subslice instead of copying
//! - **Strict Parsing**: whole-token number/bool conversion with an explicit
//!   format-error / range-error classification — never a silent wrap or a
//!   partial consume
//! - **Concatenation**: the [`cat!`](macro@crate::cat) macro folds
//!   heterogeneous `Display` values into one string
//! - **Debug Rendering**: [`dbg`](fn@crate::dbg) renders scalars bare, strings quoted,
//!   pairs colon-joined, sequences in `[...]`, and sets/maps in `{...}`,
//!   recursively
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! strkit = "0.1"
//! ```
//!
//! ### Splitting, replacing, trimming
//!
//! ```rust
//! use strkit::{split, split_n, replace, trim, trim_with, Direction};
//!
//! assert_eq!(split("x y z", ' '), vec!["x", "y", "z"]);
//! assert_eq!(split("|x|y|", '|'), vec!["", "x", "y", ""]);
//! assert_eq!(split_n("xooy", 'o', 1), vec!["x", "oy"]);
//!
//! assert_eq!(replace("xooxoox", "oo", "ee"), "xeexeex");
//!
//! assert_eq!(trim(" xx\r\n"), "xx");
//! assert_eq!(trim_with("abxxa", "ab", Direction::Left), "xxa");
//! ```
//!
//! ### Strict parsing
//!
//! Two surfaces: `Result`-returning [`parse`](fn@crate::parse), and C-style `to_*` wrappers
//! that return zero on failure and record the outcome in a thread-local
//! signal read via [`get_error`]:
//!
//! ```rust
//! use strkit::{parse, to_int32, get_error, ParseError};
//!
//! assert_eq!(parse::<i32>("-42"), Ok(-42));
//! assert_eq!(parse::<i32>("12a"), Err(ParseError::InvalidFormat));
//!
//! assert_eq!(to_int32("2147483648"), 0); // one past i32::MAX
//! assert_eq!(get_error(), Some(ParseError::OutOfRange));
//! ```
//!
//! ### Concatenation and debug rendering
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use strkit::{cat, dbg};
//!
//! assert_eq!(cat!("hello ", 23), "hello 23");
//!
//! let mut servers = BTreeMap::new();
//! servers.insert("dns", vec![53]);
//! servers.insert("web", vec![80, 443]);
//! assert_eq!(dbg(&servers), r#"{"dns":[53],"web":[80,443]}"#);
//! ```
//!
//! ## Performance Characteristics
//!
//! - Every operation is a single left-to-right pass: O(n) in the input size
//! - Trimming borrows; splitting and replacing allocate exactly their output
//! - Debug rendering recurses structurally, so stack depth equals nesting
//!   depth
//!
//! ## Concurrency
//!
//! All operations run synchronously on the calling thread and share no
//! mutable state except the parse-error signal, which is thread-local:
//! conversions on one thread never disturb the signal observed by another.

pub mod cat;
pub mod dbg;
pub mod error;
pub mod macros;
pub mod parse;
pub mod replace;
pub mod split;
pub mod trim;

pub use cat::from;
pub use dbg::{dbg, Dbg};
pub use error::{get_error, set_error, ParseError, Result};
pub use parse::{
    parse, to_bool, to_double, to_int32, to_int64, to_uint32, to_uint64, FromToken,
};
pub use replace::{replace, replace_n};
pub use split::{split, split_n, Delim};
pub use trim::{strip, trim, trim_with, CharSet, Direction};
