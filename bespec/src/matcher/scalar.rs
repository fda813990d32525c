use std::sync::Arc;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Checker, Checkers, Error, Failure, Presenter, Result, Value};

use super::Matcher;

/// Matcher that maps expectations like `beInteger` or `beArray` to the type
/// checks `is_integer` and `is_array` and evaluates them against the subject.
///
/// `beBoolean` is an alias of `beBool`.
#[must_use]
#[derive(Debug, Clone)]
pub struct ScalarMatcher<P> {
    presenter: P,
    checkers: Arc<Checkers>,
}

impl<P> ScalarMatcher<P>
where
    P: Presenter,
{
    /// Priority returned by [`Matcher::priority`].
    pub const PRIORITY: i32 = 100;

    /// Create a new [`ScalarMatcher`] that uses the built-in type checks.
    pub fn new(presenter: P) -> Self {
        Self::with_checkers(presenter, Checkers::builtin())
    }

    /// Create a new [`ScalarMatcher`] that uses the passed `checkers` instead
    /// of the built-in type checks.
    pub fn with_checkers<C: Into<Arc<Checkers>>>(presenter: P, checkers: C) -> Self {
        Self {
            presenter,
            checkers: checkers.into(),
        }
    }

    /// Get the name of the type check that is used to evaluate the expectation
    /// `name`, or `None` if `name` does not look like `be<Type>`.
    ///
    /// The name has to start with `be`, so names like `describeInteger` are
    /// rejected.
    ///
    /// Whether a check with the returned name exists is not verified.
    #[must_use]
    pub fn checker_name(name: &str) -> Option<String> {
        let suffix = NAME.captures(name)?.get(1)?.as_str().to_ascii_lowercase();

        if suffix == "boolean" {
            Some("is_bool".into())
        } else {
            Some(format!("is_{suffix}"))
        }
    }

    fn checker(&self, name: &str) -> Result<(String, Checker)> {
        let resolved = Self::checker_name(name)
            .and_then(|checker_name| Some((self.checkers.get(&checker_name)?, checker_name)));

        match resolved {
            Some((checker, checker_name)) => {
                trace!("Resolved `{name}` to `{checker_name}`");

                Ok((checker_name, checker))
            }
            None => Err(Error::UnsupportedMatcher {
                matcher: "scalar",
                name: name.into(),
            }),
        }
    }

    fn failure(&self, checker_name: &str, subject: &Value, positive: bool) -> Error {
        let call = format!("{checker_name}({})", self.presenter.present_value(subject));
        let call = self.presenter.present_string(&call);
        let expected = self.presenter.present_value(&Value::Bool(true));

        let message = if positive {
            format!("{call} expected to return {expected}, but it did not.")
        } else {
            format!("{call} not expected to return {expected}, but it did.")
        };

        debug!("{message}");

        Failure::new(message).into()
    }
}

impl<P> Matcher for ScalarMatcher<P>
where
    P: Presenter + Send + Sync,
{
    fn supports(&self, name: &str, _subject: &Value, _arguments: &[Value]) -> bool {
        Self::checker_name(name).is_some_and(|checker_name| self.checkers.contains(&checker_name))
    }

    fn positive_match(&self, name: &str, subject: &Value, _arguments: &[Value]) -> Result<()> {
        let (checker_name, checker) = self.checker(name)?;

        if checker(subject) {
            Ok(())
        } else {
            Err(self.failure(&checker_name, subject, true))
        }
    }

    fn negative_match(&self, name: &str, subject: &Value, _arguments: &[Value]) -> Result<()> {
        let (checker_name, checker) = self.checker(name)?;

        if checker(subject) {
            Err(self.failure(&checker_name, subject, false))
        } else {
            Ok(())
        }
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }
}

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^be(.+)$").unwrap());
