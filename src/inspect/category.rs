//! Value classification and token classes

use crate::value::Value;
use std::fmt;

/// Prefixes that mark a string as a CSS color
const COLOR_PREFIXES: [&str; 5] = ["#", "rgb", "rgba", "hsl", "hsla"];

/// Coarse runtime-type classification of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Null,
    Undefined,
    Array,
    Object,
    Function,
    String,
    Color,
    Symbol,
    BigInt,
    Boolean,
    Number,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Null => "null",
            Category::Undefined => "undefined",
            Category::Array => "array",
            Category::Object => "object",
            Category::Function => "function",
            Category::String => "string",
            Category::Color => "color",
            Category::Symbol => "symbol",
            Category::BigInt => "bigint",
            Category::Boolean => "boolean",
            Category::Number => "number",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value. Null wins over array, and color strings over plain strings.
pub fn classify(value: &Value) -> Category {
    match value {
        Value::Null => Category::Null,
        Value::Array(_) => Category::Array,
        Value::String(s) if is_color_like(s) => Category::Color,
        Value::String(_) => Category::String,
        Value::Number(_) => Category::Number,
        Value::Bool(_) => Category::Boolean,
        Value::Undefined => Category::Undefined,
        Value::Object(_) => Category::Object,
        Value::Function { .. } => Category::Function,
        Value::Symbol(_) => Category::Symbol,
        Value::BigInt(_) => Category::BigInt,
    }
}

/// Leading-pattern check only; the rest of the string is not validated.
fn is_color_like(s: &str) -> bool {
    COLOR_PREFIXES.iter().any(|prefix| s.starts_with(prefix))
}

/// Token class used to pick a color for a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Null,
    Undefined,
    Comment,
    Function,
    String,
    Symbol,
    BigInt,
    Boolean,
    Number,
}

impl StyleClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleClass::Null => "null",
            StyleClass::Undefined => "undefined",
            StyleClass::Comment => "comment",
            StyleClass::Function => "function",
            StyleClass::String => "string",
            StyleClass::Symbol => "symbol",
            StyleClass::BigInt => "bigint",
            StyleClass::Boolean => "boolean",
            StyleClass::Number => "number",
        }
    }
}

impl From<Category> for StyleClass {
    fn from(category: Category) -> Self {
        match category {
            Category::Color | Category::String => StyleClass::String,
            Category::Object | Category::Array => StyleClass::Comment,
            Category::Null => StyleClass::Null,
            Category::Undefined => StyleClass::Undefined,
            Category::Function => StyleClass::Function,
            Category::Symbol => StyleClass::Symbol,
            Category::BigInt => StyleClass::BigInt,
            Category::Boolean => StyleClass::Boolean,
            Category::Number => StyleClass::Number,
        }
    }
}
