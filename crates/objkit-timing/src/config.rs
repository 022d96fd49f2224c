use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a [`Debouncer`](crate::Debouncer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period after the last call before the function runs.
    #[serde(with = "millis")]
    pub wait: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(250),
        }
    }
}

impl DebounceConfig {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            wait: Duration::from_millis(ms),
        }
    }
}

/// Durations are written as whole milliseconds (`wait = 250`).
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
