//! Structured values for objkit.
//!
//! Every other objkit crate depends on `objkit-types`. It defines the
//! [`Value`] sum type the merge and compare engines walk, plus its JSON
//! interop.
//!
//! # Key Types
//!
//! - [`Value`] — leaf (`Undefined`, `Null`, `Bool`, `Number`, `String`) or
//!   container (`List`, `Map`)
//! - [`Map`] — insertion-ordered keyed container
//! - [`OwnEntries`] / [`OwnValues`] — depth-one traversal in key order

pub mod error;
pub mod json;
pub mod key;
pub mod value;

#[cfg(any(test, feature = "proptest"))]
pub mod arbitrary;

pub use error::{Result, TypeError};
pub use value::{Map, OwnEntries, OwnValues, Value};
