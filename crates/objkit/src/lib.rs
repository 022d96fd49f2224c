//! Generic helpers for structured data.
//!
//! This is the main entry point for applications using objkit. It
//! re-exports the merge, compare and timing engines and adds the small
//! helpers that need no crate of their own.
//!
//! # Key Items
//!
//! - [`merge`] / [`merge_concat_arrays`] / [`merge_replace_arrays`] -- deep merge
//! - [`deep_equal`] -- equality of flattened leaf sequences
//! - [`left_outer_join`] and friends -- set difference preserving order
//! - [`clone_value`] -- deep copy through a JSON round trip
//! - [`Debouncer`] / [`delay`] -- tokio timing helpers
//! - [`PrintableError`] -- errors safe to show an end user
//! - [`Toolkit`] -- all of the above with configured defaults

pub mod clone;
pub mod collections;
pub mod config;
pub mod error;
pub mod printable;
pub mod query;
pub mod random;
pub mod toolkit;

pub use clone::{clone_value, clone_via_json};
pub use collections::{
    left_outer_join, left_outer_join_by, left_outer_join_on, map_entries, map_entries_generic,
};
pub use config::ToolkitConfig;
pub use error::{ObjkitError, ObjkitResult};
pub use printable::PrintableError;
pub use query::normalize_query;
pub use random::{random_int, random_int_with};
pub use toolkit::Toolkit;

// Re-export the engines
pub use objkit_compare::{deep_equal, flatten, strict_equals};
pub use objkit_merge::{merge, merge_concat_arrays, merge_replace_arrays, MergePolicy};
pub use objkit_timing::{delay, delay_ms, DebounceConfig, Debouncer, TimingError};
pub use objkit_types::{Map, Value};
