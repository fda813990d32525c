//! The [`error`](self) module defines the errors returned by matchers and the
//! [`MatcherManager`](crate::MatcherManager).

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that may be returned while evaluating an expectation.
#[derive(Debug, Error)]
pub enum Error {
    /// The expectation was not met.
    #[error(transparent)]
    Failure(#[from] Failure),

    /// A matcher was asked to evaluate a name it does not support.
    ///
    /// This happens if `positive_match` or `negative_match` is called without
    /// checking `supports` first.
    #[error("The {matcher} matcher does not support `{name}`.")]
    UnsupportedMatcher {
        /// Name of the matcher that was misused.
        matcher: &'static str,

        /// Name of the expectation that could not be resolved.
        name: String,
    },

    /// None of the registered matchers supports the expectation.
    #[error("{message}")]
    MatcherNotFound {
        /// Human readable description of the missing matcher.
        message: String,
    },
}

impl Error {
    /// Returns the [`Failure`] if this error is a failed expectation.
    #[must_use]
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

/// A failed expectation.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    /// Create a new [`Failure`] with the passed `message`.
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message that describes the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
