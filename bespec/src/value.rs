//! The [`value`](self) module contains the dynamically typed [`Value`] that is
//! used as subject of an expectation.

/// A loosely typed runtime value that is tested by the matchers.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,

    /// A boolean value.
    Bool(bool),

    /// A signed integer value.
    Int(i64),

    /// A floating point value.
    Float(f64),

    /// A string value.
    String(String),

    /// An ordered map of keys to values. Lists use the keys `0..n`.
    Array(Vec<(Key, Value)>),

    /// An instance of a class.
    Object(Object),
}

impl Value {
    /// Create a new array value from the passed `items`, keyed `0..n`.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Array(
            items
                .into_iter()
                .zip(0..)
                .map(|(value, index)| (Key::Int(index), value.into()))
                .collect(),
        )
    }

    /// Create a new array value from the passed key-value `pairs`.
    pub fn map<I, K, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Key>,
        T: Into<Value>,
    {
        Self::Array(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the name of the type of this value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

/// Key of an entry in a [`Value::Array`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    /// Integer key.
    Int(i64),

    /// String key.
    Str(String),
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// An instance of a class.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// Name of the class the object is an instance of.
    pub class: String,

    /// Interfaces implemented by the class.
    pub interfaces: Vec<String>,

    /// Whether the object can be invoked like a function.
    pub invokable: bool,
}

impl Object {
    /// Create a new object of the passed `class`.
    pub fn new<C: Into<String>>(class: C) -> Self {
        Self {
            class: class.into(),
            interfaces: Vec::new(),
            invokable: false,
        }
    }

    /// Create a new anonymous function object.
    pub fn closure() -> Self {
        Self::new("Closure").invokable(true)
    }

    /// Mark the class of the object as implementor of `interface`.
    pub fn implementing<I: Into<String>>(mut self, interface: I) -> Self {
        self.interfaces.push(interface.into());

        self
    }

    /// Set whether the object can be invoked like a function.
    pub fn invokable(mut self, invokable: bool) -> Self {
        self.invokable = invokable;

        self
    }

    /// Returns `true` if the class of the object implements `interface`.
    #[must_use]
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|x| x == interface)
    }
}

macro_rules! impl_from {
    ($type:ty => $variant:ident) => {
        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

impl_from!(bool => Bool);
impl_from!(i32 => Int);
impl_from!(i64 => Int);
impl_from!(f64 => Float);
impl_from!(&str => String);
impl_from!(String => String);
impl_from!(Object => Object);

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
