/// Errors produced by the timing helpers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimingError {
    /// The pending debounced call was cancelled before it fired.
    #[error("debounced call cancelled")]
    Cancelled,

    /// A timer was requested outside of a tokio runtime.
    #[error("no tokio runtime available to drive the timer")]
    RuntimeUnavailable,
}

/// Convenience alias used throughout the timing crate.
pub type Result<T> = std::result::Result<T, TimingError>;
