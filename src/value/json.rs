//! Conversion from parsed JSON documents

use super::{Properties, Value};
use crate::error::Result;
use std::io::Read;

/// Largest integer an `f64` represents exactly (2^53)
const MAX_SAFE_INTEGER: u64 = 1 << 53;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Properties>(),
            ),
        }
    }
}

/// Parse a JSON document into an inspectable value
pub fn parse_json(text: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(json))
}

/// Read and parse a whole JSON document
pub fn read_json<R: Read>(reader: R) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    log::debug!("decoded JSON document ({})", json_kind(&json));
    Ok(Value::from(json))
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Integers beyond the f64-exact range keep their precision as BigInt
fn number_to_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() > MAX_SAFE_INTEGER {
            return Value::BigInt(i128::from(i));
        }
        return Value::Number(i as f64);
    }
    if let Some(u) = n.as_u64() {
        if u > MAX_SAFE_INTEGER {
            return Value::BigInt(i128::from(u));
        }
        return Value::Number(u as f64);
    }
    Value::Number(n.as_f64().unwrap_or(f64::NAN))
}
