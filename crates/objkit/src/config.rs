use serde::{Deserialize, Serialize};

use objkit_merge::MergePolicy;
use objkit_timing::DebounceConfig;

use crate::error::ObjkitResult;

/// Settings for a [`Toolkit`](crate::Toolkit).
///
/// Every field has a default, so a TOML document only needs the keys it
/// changes:
///
/// ```toml
/// merge_policy = "replace"
/// random_seed = 42
///
/// [debounce]
/// wait = 100
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// List handling for [`Toolkit::merge`](crate::Toolkit::merge).
    pub merge_policy: MergePolicy,
    /// Wait used by [`Toolkit::debouncer`](crate::Toolkit::debouncer).
    pub debounce: DebounceConfig,
    /// Seed for [`Toolkit::random_int`](crate::Toolkit::random_int). When
    /// unset the generator is seeded from the OS.
    pub random_seed: Option<u64>,
}

impl ToolkitConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> ObjkitResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
