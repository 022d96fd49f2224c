use std::fmt;

use serde::{Deserialize, Serialize};

use objkit_types::Value;

/// How two list values at the same key combine during a merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Append the right list to the left one, keeping duplicates.
    #[default]
    Concat,
    /// The right list replaces the left one wholesale, even when empty.
    Replace,
}

impl MergePolicy {
    /// Combine two lists found at the same key.
    pub fn merge_lists(self, prev: &[Value], next: &[Value]) -> Vec<Value> {
        match self {
            MergePolicy::Concat => prev.iter().chain(next).cloned().collect(),
            MergePolicy::Replace => next.to_vec(),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::Concat => f.write_str("concat"),
            MergePolicy::Replace => f.write_str("replace"),
        }
    }
}
