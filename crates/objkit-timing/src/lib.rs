//! Timing helpers for objkit.
//!
//! A delay primitive and a debouncer, both driven by the tokio timer.

pub mod config;
pub mod debounce;
pub mod delay;
pub mod error;

pub use config::DebounceConfig;
pub use debounce::Debouncer;
pub use delay::{delay, delay_ms};
pub use error::{Result, TimingError};
