//! Comparison engine for objkit.
//!
//! Flattens structured values into their leaves and compares the leaf
//! sequences. The comparison is order- and type-sensitive but ignores key
//! names.
//!
//! # Key Functions
//!
//! - [`flatten`] -- depth-first leaf extraction
//! - [`deep_equal`] -- equality of N values by flattened leaves
//! - [`strict_equals`] / [`leaves_identical`] -- the leaf-level checks

pub mod equal;
pub mod flatten;

pub use equal::{deep_equal, leaves_identical, strict_equals};
pub use flatten::flatten;

#[cfg(test)]
mod properties;
