//! Errors whose message is safe to show to an end user.

use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error carrying a user-facing message and an optional underlying cause.
///
/// The cause is reachable through [`std::error::Error::source`] but never
/// appears in the message. Code that reports errors checks
/// [`PrintableError::is_printable`] to decide between the message and a
/// generic fallback.
#[derive(Debug)]
pub struct PrintableError {
    message: String,
    source: Option<BoxError>,
    printable: bool,
}

impl PrintableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            printable: true,
        }
    }

    /// Wrap `cause` behind a user-facing `message`.
    pub fn with_source(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(cause.into()),
            printable: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if `err` is a [`PrintableError`] flagged printable.
    /// Any other error type is not printable.
    pub fn is_printable(err: &(dyn StdError + 'static)) -> bool {
        err.downcast_ref::<PrintableError>()
            .is_some_and(|e| e.printable)
    }

    /// The message to show an end user for `err`: its own message when
    /// printable, `fallback` otherwise.
    pub fn user_message(err: &(dyn StdError + 'static), fallback: &str) -> String {
        match err.downcast_ref::<PrintableError>() {
            Some(e) if e.printable => e.message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for PrintableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for PrintableError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}
