//! The [`manager`](self) module implements the [`MatcherManager`] that selects
//! the matcher used to evaluate an expectation.

use log::debug;

use crate::{Error, Matcher, Presenter, Result, ScalarMatcher, Value};

/// Keeps track of the registered [`Matcher`]s and dispatches expectations to
/// the best one.
#[must_use]
pub struct MatcherManager<P> {
    presenter: P,
    matchers: Vec<Box<dyn Matcher>>,
}

impl<P> MatcherManager<P>
where
    P: Presenter,
{
    /// Create a new [`MatcherManager`] without any registered matchers.
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            matchers: Vec::new(),
        }
    }

    /// Create a new [`MatcherManager`] with the matchers of this crate
    /// registered.
    pub fn with_defaults(presenter: P) -> Self
    where
        P: Clone + Send + Sync + 'static,
    {
        let mut manager = Self::new(presenter.clone());
        manager.add(ScalarMatcher::new(presenter));

        manager
    }

    /// Register a new `matcher`.
    pub fn add<M>(&mut self, matcher: M) -> &mut Self
    where
        M: Matcher + 'static,
    {
        self.matchers.push(Box::new(matcher));

        self
    }

    /// Number of registered matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` if no matcher is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Find the matcher with the highest priority that supports the expectation
    /// `name`. If multiple matchers share the highest priority, the one that
    /// was registered first is returned.
    ///
    /// # Errors
    /// Returns [`Error::MatcherNotFound`] if no registered matcher supports the
    /// expectation.
    pub fn find(&self, name: &str, subject: &Value, arguments: &[Value]) -> Result<&dyn Matcher> {
        let mut found: Option<&dyn Matcher> = None;

        for matcher in &self.matchers {
            if !matcher.supports(name, subject, arguments) {
                continue;
            }

            if found.is_none_or(|best| matcher.priority() > best.priority()) {
                found = Some(matcher.as_ref());
            }
        }

        found.ok_or_else(|| self.not_found(name, subject, arguments))
    }

    /// Evaluate the expectation `name` using the best matching matcher.
    ///
    /// # Errors
    /// Returns [`Error::MatcherNotFound`] if no matcher supports the expectation,
    /// or any error of [`Matcher::positive_match`].
    pub fn positive_match(&self, name: &str, subject: &Value, arguments: &[Value]) -> Result<()> {
        self.find(name, subject, arguments)?
            .positive_match(name, subject, arguments)
    }

    /// Evaluate the negated expectation `name` using the best matching matcher.
    ///
    /// # Errors
    /// Returns [`Error::MatcherNotFound`] if no matcher supports the expectation,
    /// or any error of [`Matcher::negative_match`].
    pub fn negative_match(&self, name: &str, subject: &Value, arguments: &[Value]) -> Result<()> {
        self.find(name, subject, arguments)?
            .negative_match(name, subject, arguments)
    }

    fn not_found(&self, name: &str, subject: &Value, arguments: &[Value]) -> Error {
        let arguments = arguments
            .iter()
            .map(|x| self.presenter.present_value(x))
            .collect::<Vec<_>>()
            .join(", ");
        let message = format!(
            "No {name}({arguments}) matcher found for {}.",
            self.presenter.present_value(subject)
        );

        debug!("{message}");

        Error::MatcherNotFound { message }
    }
}
