//! JSON <-> selq Value conversion utilities

use crate::value::Value;

/// Convert a decoded `serde_json::Value` into a selq [`Value`].
///
/// Object key order from the source document is kept.
pub fn json_to_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        // Every serde_json number (including u64/i64) has an f64 view
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(obj) => {
            Value::Object(obj.into_iter().map(|(k, v)| (k, json_to_value(v))).collect())
        }
    }
}

/// Convert a selq [`Value`] into a `serde_json::Value`.
///
/// JSON has no representation for NaN or infinities; those become `null`.
/// Integral numbers that fit in an `i64` are emitted as JSON integers.
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
            serde_json::Value::Number((n as i64).into())
        }
        Value::Number(n) => serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s),
        Value::Array(arr) => serde_json::Value::Array(arr.into_iter().map(value_to_json).collect()),
        Value::Object(obj) => serde_json::Value::Object(
            obj.into_iter()
                .map(|(k, v)| (k, value_to_json(v)))
                .collect(),
        ),
    }
}

/// Decode raw JSON text straight into a [`Value`].
///
/// # Examples
///
/// ```
/// use selq::convert::parse_json;
/// use selq::Value;
///
/// let value = parse_json(r#"[{"age": 30}]"#).unwrap();
/// assert_eq!(value.as_array().map(|rows| rows.len()), Some(1));
/// assert_eq!(value.as_array().unwrap()[0].get("age"), Some(&Value::Number(30.0)));
/// ```
pub fn parse_json(text: &str) -> Result<Value, serde_json::Error> {
    let decoded: serde_json::Value = serde_json::from_str(text)?;
    Ok(json_to_value(decoded))
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        json_to_value(v)
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        value_to_json(v)
    }
}
