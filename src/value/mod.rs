//! Inspected value representation
//!
//! This module defines the [`Value`] enum, a tagged union covering every shape the
//! inspector knows how to display. Values are owned trees: a value cannot contain
//! itself, so traversal always terminates.
//!
//! # Value Types
//!
//! - [`Value::Null`] / [`Value::Undefined`]: the two "no value" markers
//! - [`Value::Bool`], [`Value::Number`], [`Value::BigInt`], [`Value::String`]: primitives
//! - [`Value::Symbol`]: an opaque symbol with an optional description
//! - [`Value::Function`]: an opaque callable with a name and its own properties
//! - [`Value::Array`]: ordered elements, enumerated by index
//! - [`Value::Object`]: insertion-ordered [`Properties`]

pub mod json;

/// Values the inspector can display
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Option<String>), // Description, if any
    Function {
        name: String,
        properties: Properties,
    },
    Array(Vec<Value>),
    Object(Properties),
}

impl Default for Value {
    /// An empty object, the inspector's default data
    fn default() -> Self {
        Value::Object(Properties::new())
    }
}

impl Value {
    /// Build a function value without properties
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function {
            name: name.into(),
            properties: Properties::new(),
        }
    }

    /// Build a symbol value with a description
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(Some(description.into()))
    }

    /// Whether the value can have own entries (object, array or function)
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Array(_) | Value::Function { .. }
        )
    }

    /// The value's own enumerable entries, in enumeration order.
    ///
    /// Arrays yield their elements keyed by index; primitives yield nothing.
    pub fn entries(&self) -> Vec<(String, &Value)> {
        match self {
            Value::Object(props) | Value::Function { properties: props, .. } => props
                .iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
            Value::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(idx, value)| (idx.to_string(), value))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Get the string contents, returns None if not a String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<Properties> for Value {
    fn from(props: Properties) -> Self {
        Value::Object(props)
    }
}

/// Insertion-ordered property list with unique keys
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    entries: Vec<(String, Value)>,
}

impl Properties {
    pub fn new() -> Self {
        Properties {
            entries: Vec::new(),
        }
    }

    /// Set a property. Assigning an existing key replaces its value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`Properties::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}
