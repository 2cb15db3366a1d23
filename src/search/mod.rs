//! Text search primitives used by the listing filter.
//!
//! - [`kmp`]: linear-time, case-insensitive exact substring matching

pub mod kmp;

pub use kmp::{matches, prefix_function, Matcher};
