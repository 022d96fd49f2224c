use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use objkit_merge::merge;
use objkit_timing::Debouncer;
use objkit_types::Value;

use crate::config::ToolkitConfig;
use crate::error::ObjkitResult;
use crate::random::random_int_with;

/// The helpers bundled with a [`ToolkitConfig`].
///
/// Free functions cover every helper with explicit arguments; a `Toolkit`
/// applies configured defaults instead.
pub struct Toolkit {
    config: ToolkitConfig,
    rng: Mutex<StdRng>,
}

impl Toolkit {
    pub fn new(config: ToolkitConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            merge_policy = %config.merge_policy,
            seeded = config.random_seed.is_some(),
            "toolkit created"
        );
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Build a toolkit from a TOML document. See [`ToolkitConfig`].
    pub fn from_toml_str(text: &str) -> ObjkitResult<Self> {
        Ok(Self::new(ToolkitConfig::from_toml_str(text)?))
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Deep merge under the configured policy.
    pub fn merge(&self, values: &[Value]) -> Value {
        merge(self.config.merge_policy, values)
    }

    /// Debounce `func` with the configured wait.
    pub fn debouncer<A, R, F>(&self, func: F) -> Debouncer<A, R>
    where
        A: Send + 'static,
        R: Clone + Send + 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Debouncer::with_config(&self.config.debounce, func)
    }

    /// Random integer from the toolkit's generator.
    pub fn random_int(&self, min: i64, max: i64, include_max: bool) -> i64 {
        let mut rng = self.rng.lock().expect("toolkit rng mutex poisoned");
        random_int_with(&mut *rng, min, max, include_max)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(ToolkitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use objkit_merge::MergePolicy;
    use serde_json::json;

    #[test]
    fn merge_uses_configured_policy() {
        let inputs = [
            Value::from(json!({"k": [1, 2]})),
            Value::from(json!({"k": [3]})),
        ];

        let concat = Toolkit::default();
        assert_eq!(concat.merge(&inputs), Value::from(json!({"k": [1, 2, 3]})));

        let replace = Toolkit::new(ToolkitConfig {
            merge_policy: MergePolicy::Replace,
            ..Default::default()
        });
        assert_eq!(replace.merge(&inputs), Value::from(json!({"k": [3]})));
    }

    #[test]
    fn seeded_toolkits_agree() {
        let a = Toolkit::from_toml_str("random_seed = 9").unwrap();
        let b = Toolkit::from_toml_str("random_seed = 9").unwrap();
        let draws_a: Vec<i64> = (0..8).map(|_| a.random_int(0, 1000, false)).collect();
        let draws_b: Vec<i64> = (0..8).map(|_| b.random_int(0, 1000, false)).collect();
        assert_eq!(draws_a, draws_b);
        assert!(draws_a.iter().all(|n| (0..1000).contains(n)));
    }

    #[test]
    fn debouncer_uses_configured_wait() {
        let toolkit = Toolkit::from_toml_str("[debounce]\nwait = 30").unwrap();
        let debouncer = toolkit.debouncer(|n: u8| n);
        assert_eq!(debouncer.wait(), Duration::from_millis(30));
    }
}
