//! The [`presenter`](self) module contains types that render values and code
//! snippets for failure messages.

use std::sync::Arc;

use crate::Value;

/// A presenter renders values and code snippets into human readable strings.
pub trait Presenter {
    /// Render the passed `value`.
    fn present_value(&self, value: &Value) -> String;

    /// Render the passed code-like `string`.
    fn present_string(&self, string: &str) -> String;
}

macro_rules! impl_presenter {
    ($type:ty) => {
        impl<P> Presenter for $type
        where
            P: Presenter + ?Sized,
        {
            fn present_value(&self, value: &Value) -> String {
                (**self).present_value(value)
            }

            fn present_string(&self, string: &str) -> String {
                (**self).present_string(string)
            }
        }
    };
}

impl_presenter!(&P);
impl_presenter!(Box<P>);
impl_presenter!(Arc<P>);

/* StringPresenter */

/// Presents values as plain text.
#[must_use]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StringPresenter {
    max_string_length: usize,
}

impl StringPresenter {
    /// Default length strings are truncated at.
    pub const DEFAULT_MAX_STRING_LENGTH: usize = 25;

    /// Create a new [`StringPresenter`] instance.
    pub fn new() -> Self {
        Self {
            max_string_length: Self::DEFAULT_MAX_STRING_LENGTH,
        }
    }

    /// Set the number of characters after which presented strings are
    /// truncated.
    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;

        self
    }

    fn present_str(&self, s: &str) -> String {
        if s.chars().count() < self.max_string_length && !s.contains('\n') {
            return format!("\"{s}\"");
        }

        let first_line = s.lines().next().unwrap_or_default();
        let truncated = first_line
            .chars()
            .take(self.max_string_length)
            .collect::<String>();

        format!("\"{truncated}\"...")
    }
}

impl Default for StringPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for StringPresenter {
    fn present_value(&self, value: &Value) -> String {
        match value {
            Value::Object(o) => format!("[obj:{}]", o.class),
            Value::Array(items) => format!("[array:{}]", items.len()),
            Value::String(s) => self.present_str(s),
            Value::Bool(true) => "true".into(),
            Value::Bool(false) => "false".into(),
            Value::Null => "null".into(),
            Value::Int(x) => format!("[{}:{x}]", value.type_name()),
            Value::Float(x) => format!("[{}:{x}]", value.type_name()),
        }
    }

    fn present_string(&self, string: &str) -> String {
        string.into()
    }
}

/* TaggedPresenter */

/// Wraps the output of an inner presenter in `<value>` and `<code>` tags, so
/// that a formatter can highlight them.
#[must_use]
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct TaggedPresenter<P = StringPresenter> {
    inner: P,
}

impl<P> TaggedPresenter<P> {
    /// Create a new [`TaggedPresenter`] that wraps `inner`.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P> Presenter for TaggedPresenter<P>
where
    P: Presenter,
{
    fn present_value(&self, value: &Value) -> String {
        format!("<value>{}</value>", self.inner.present_value(value))
    }

    fn present_string(&self, string: &str) -> String {
        format!("<code>{}</code>", self.inner.present_string(string))
    }
}
