//! The [`matcher`](self) module defines the [`Matcher`] interface and the
//! matchers shipped with this crate.

mod scalar;

pub use scalar::ScalarMatcher;

use crate::{Result, Value};

/// A matcher evaluates one family of expectations (like `beInteger`) against
/// a subject.
///
/// The [`MatcherManager`](crate::MatcherManager) asks every registered matcher
/// whether it [`supports`](Matcher::supports) an expectation and delegates to
/// the supporting matcher with the highest [`priority`](Matcher::priority).
///
/// Matchers are shared between threads, so implementations must be
/// [`Send`] and [`Sync`].
pub trait Matcher: Send + Sync {
    /// Returns `true` if this matcher is able to evaluate the expectation
    /// `name` for the passed `subject` and `arguments`.
    fn supports(&self, name: &str, subject: &Value, arguments: &[Value]) -> bool;

    /// Evaluate the expectation `name` against `subject`.
    ///
    /// # Errors
    /// Returns [`Error::Failure`](crate::Error::Failure) if the expectation is
    /// not met.
    fn positive_match(&self, name: &str, subject: &Value, arguments: &[Value]) -> Result<()>;

    /// Evaluate the negation of the expectation `name` against `subject`.
    ///
    /// # Errors
    /// Returns [`Error::Failure`](crate::Error::Failure) if the expectation is
    /// met.
    fn negative_match(&self, name: &str, subject: &Value, arguments: &[Value]) -> Result<()>;

    /// Priority of the matcher. Higher values are preferred.
    fn priority(&self) -> i32;
}
