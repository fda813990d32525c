//! The [`checker`](self) module contains the table of type checking predicates
//! the [`ScalarMatcher`](crate::ScalarMatcher) delegates to.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Value;

/// A unary type checking predicate.
pub type Checker = fn(&Value) -> bool;

/// Table of named [`Checker`]s.
#[must_use]
#[derive(Default, Clone)]
pub struct Checkers {
    table: HashMap<String, Checker>,
}

impl Checkers {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the shared table of built-in type checks.
    pub fn builtin() -> Arc<Self> {
        BUILTIN.clone()
    }

    /// Add a checker to the table, returning the checker that was previously
    /// registered under the same `name`.
    pub fn insert<N: Into<String>>(&mut self, name: N, checker: Checker) -> Option<Checker> {
        self.table.insert(name.into(), checker)
    }

    /// Builder style variant of [`insert`](Self::insert).
    pub fn with<N: Into<String>>(mut self, name: N, checker: Checker) -> Self {
        self.insert(name, checker);

        self
    }

    /// Get the checker registered as `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Checker> {
        self.table.get(name).copied()
    }

    /// Returns `true` if a checker is registered as `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Iterate over the names of the registered checkers in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.keys().map(String::as_str)
    }

    /// Number of registered checkers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no checker is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Debug for Checkers {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut names = self.names().collect::<Vec<_>>();
        names.sort_unstable();

        f.debug_set().entries(names).finish()
    }
}

static BUILTIN: Lazy<Arc<Checkers>> = Lazy::new(|| {
    Arc::new(
        Checkers::new()
            .with("is_int", is_int)
            .with("is_integer", is_int)
            .with("is_long", is_int)
            .with("is_float", is_float)
            .with("is_double", is_float)
            .with("is_string", is_string)
            .with("is_bool", is_bool)
            .with("is_array", is_array)
            .with("is_object", is_object)
            .with("is_null", is_null)
            .with("is_callable", is_callable)
            .with("is_numeric", is_numeric)
            .with("is_scalar", is_scalar)
            .with("is_iterable", is_iterable)
            .with("is_countable", is_countable),
    )
});

/* Built-in checks */

pub fn is_int(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}

pub fn is_float(value: &Value) -> bool {
    matches!(value, Value::Float(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Closures and objects with an `__invoke` method are callable.
pub fn is_callable(value: &Value) -> bool {
    matches!(value, Value::Object(o) if o.invokable)
}

/// Numbers and strings that contain a decimal number, optionally surrounded by
/// whitespace.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::String(s) => NUMERIC.is_match(s),
        _ => false,
    }
}

pub fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_)
    )
}

pub fn is_iterable(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(o) => o.implements("Traversable"),
        _ => false,
    }
}

pub fn is_countable(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(o) => o.implements("Countable"),
        _ => false,
    }
}

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .unwrap()
});
