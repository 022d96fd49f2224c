//! Merge engine for objkit.
//!
//! Deep-merges any number of structured values into a fresh map, with two
//! policies for lists found at the same key: concatenate or replace.
//!
//! # Key Types
//!
//! - [`MergePolicy`] -- `Concat` (default) or `Replace`
//! - [`merge`] / [`merge_concat_arrays`] / [`merge_replace_arrays`] -- entry points

pub mod merge;
pub mod policy;

pub use merge::{merge, merge_concat_arrays, merge_replace_arrays};
pub use policy::MergePolicy;

#[cfg(test)]
mod properties;
