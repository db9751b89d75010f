//! Short display labels per category

use super::category::{classify, Category};
use crate::value::Value;

/// Format the label shown next to a node's key.
///
/// String labels are quoted but not escaped, so a string holding `"` reads ambiguously.
pub fn format_label(value: &Value, category: Category) -> String {
    match (category, value) {
        (Category::Array, Value::Array(elements)) => format!("Array({})", elements.len()),
        (Category::Null, _) => "null".to_string(),
        (Category::Undefined, _) => "undefined".to_string(),
        (Category::Function, Value::Function { name, .. }) => format!("f {}()", name),
        (Category::Object, _) => "Object".to_string(),
        (Category::String | Category::Color, Value::String(s)) => format!("\"{}\"", s),
        (Category::Symbol, Value::Symbol(description)) => {
            format!("Symbol({})", symbol_string(description.as_deref()))
        }
        _ => match value {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::BigInt(n) => n.to_string(),
            // Category did not match the value; label it by its own category
            other => format_label(other, classify(other)),
        },
    }
}

/// A symbol's own string conversion, `Symbol(<description>)`
fn symbol_string(description: Option<&str>) -> String {
    format!("Symbol({})", description.unwrap_or(""))
}

/// Number to string the way a JS engine prints it
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string(); // Covers -0
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        // Rust omits the sign of positive exponents
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Properties;

    fn label(value: &Value) -> String {
        format_label(value, classify(value))
    }

    #[test]
    fn test_array_labels() {
        assert_eq!(label(&Value::Array(vec![])), "Array(0)");
        assert_eq!(
            label(&Value::Array(vec![1.into(), 2.into(), 3.into()])),
            "Array(3)"
        );
    }

    #[test]
    fn test_null_and_undefined() {
        assert_eq!(label(&Value::Null), "null");
        assert_eq!(label(&Value::Undefined), "undefined");
    }

    #[test]
    fn test_string_labels_are_quoted_unescaped() {
        assert_eq!(label(&Value::from("hello")), "\"hello\"");
        assert_eq!(label(&Value::from("#fff")), "\"#fff\"");
        assert_eq!(label(&Value::from("say \"hi\"")), "\"say \"hi\"\"");
    }

    #[test]
    fn test_function_labels() {
        assert_eq!(label(&Value::function("foo")), "f foo()");
        assert_eq!(label(&Value::function("")), "f ()");
    }

    #[test]
    fn test_object_and_symbol() {
        let obj = Value::Object(Properties::new().with("a", 1));
        assert_eq!(label(&obj), "Object");
        assert_eq!(label(&Value::symbol("token")), "Symbol(Symbol(token))");
        assert_eq!(label(&Value::Symbol(None)), "Symbol(Symbol())");
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(label(&Value::Bool(true)), "true");
        assert_eq!(label(&Value::BigInt(-12345678901234567890)), "-12345678901234567890");
        assert_eq!(label(&Value::Number(1.0)), "1");
        assert_eq!(label(&Value::Number(-2.5)), "-2.5");
    }

    #[test]
    fn test_mismatched_category_falls_back_to_own_label() {
        assert_eq!(format_label(&Value::Null, Category::Number), "null");
        assert_eq!(format_label(&Value::from("x"), Category::Array), "\"x\"");
        assert_eq!(format_label(&Value::Number(4.0), Category::String), "4");
    }

    #[test]
    fn test_number_formatting_edge_cases() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }
}
