//! Canonical text rendering of [`Value`]s.
//!
//! The canonical form is what the `==` operator compares and what records
//! print as. It keeps object keys in insertion order and follows these rules:
//!
//! - objects render as `{"key": value, ...}`, arrays as `[v, ...]`
//! - strings are double-quoted with JSON escapes
//! - integral numbers keep one fractional digit (`30.0`), very large or very
//!   small magnitudes switch to scientific form (`1e16`, `1e-5`)
//! - booleans render as `true`/`false`, null as `null`
//!
//! # Examples
//!
//! ```
//! use selq::Value;
//! use selq::output::to_canonical;
//!
//! assert_eq!(to_canonical(&Value::Number(30.0)), "30.0");
//! assert_eq!(to_canonical(&Value::String("30".into())), "\"30\"");
//! ```

use std::fmt;

use crate::value::{Map, Value};

pub struct ValuePrinter {
    pretty: bool,
}

impl ValuePrinter {
    pub fn new(pretty: bool) -> Self {
        ValuePrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        let mut out = String::new();
        self.print_value(&mut out, value, 0);
        out
    }

    fn print_value(&self, out: &mut String, value: &Value, indent: usize) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&format_number(*n)),
            Value::String(s) => write_quoted(out, s),
            Value::Array(arr) => self.print_array(out, arr, indent),
            Value::Object(obj) => self.print_object(out, obj, indent),
        }
    }

    fn print_array(&self, out: &mut String, arr: &[Value], indent: usize) {
        if arr.is_empty() {
            out.push_str("[]");
            return;
        }

        out.push('[');
        for (i, item) in arr.iter().enumerate() {
            self.separator(out, i, indent + 1);
            self.print_value(out, item, indent + 1);
        }
        self.close(out, indent);
        out.push(']');
    }

    fn print_object(&self, out: &mut String, obj: &Map, indent: usize) {
        if obj.is_empty() {
            out.push_str("{}");
            return;
        }

        out.push('{');
        for (i, (key, item)) in obj.iter().enumerate() {
            self.separator(out, i, indent + 1);
            write_quoted(out, key);
            out.push_str(": ");
            self.print_value(out, item, indent + 1);
        }
        self.close(out, indent);
        out.push('}');
    }

    /// Writes whatever goes before the `index`-th element of a collection.
    fn separator(&self, out: &mut String, index: usize, level: usize) {
        if self.pretty {
            if index > 0 {
                out.push(',');
            }
            out.push('\n');
            out.push_str(&"  ".repeat(level));
        } else if index > 0 {
            out.push_str(", ");
        }
    }

    fn close(&self, out: &mut String, level: usize) {
        if self.pretty {
            out.push('\n');
            out.push_str(&"  ".repeat(level));
        }
    }
}

/// Renders a number in its canonical decimal form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format!("{:e}", n)
    } else if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Renders a value on a single line in canonical form.
///
/// Two values compare equal under `==` exactly when this function returns
/// the same text for both.
pub fn to_canonical(value: &Value) -> String {
    ValuePrinter::new(false).print(value)
}

/// Renders a value with two-space indentation, one element per line.
///
/// # Examples
///
/// ```
/// use selq::Value;
/// use selq::output::to_pretty;
/// use selq::value::Map;
///
/// let mut obj = Map::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Number(30.0));
///
/// assert_eq!(
///     to_pretty(&Value::Object(obj)),
///     "{\n  \"name\": \"Alice\",\n  \"age\": 30.0\n}"
/// );
/// ```
pub fn to_pretty(value: &Value) -> String {
    ValuePrinter::new(true).print(value)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_canonical(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_numbers_keep_fraction() {
        assert_eq!(format_number(30.0), "30.0");
        assert_eq!(format_number(-2.0), "-2.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn test_fractional_and_extreme_numbers() {
        assert_eq!(format_number(95.5), "95.5");
        assert_eq!(format_number(1e16), "1e16");
        assert_eq!(format_number(0.00001), "1e-5");
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let mut obj = Map::new();
        obj.insert("z".to_string(), Value::Boolean(true));
        obj.insert("a".to_string(), Value::Null);
        obj.insert(
            "m".to_string(),
            Value::Array(vec![Value::Number(1.0), Value::String("x".into())]),
        );

        assert_eq!(
            to_canonical(&Value::Object(obj)),
            r#"{"z": true, "a": null, "m": [1.0, "x"]}"#
        );
    }

    #[test]
    fn test_string_escaping() {
        let value = Value::String("say \"hi\"\n\u{1}".into());
        assert_eq!(to_canonical(&value), r#""say \"hi\"\n\u0001""#);
    }

    #[test]
    fn test_pretty_nested() {
        let mut inner = Map::new();
        inner.insert("k".to_string(), Value::Number(1.5));
        let value = Value::Array(vec![Value::Object(inner), Value::Array(vec![])]);

        assert_eq!(to_pretty(&value), "[\n  {\n    \"k\": 1.5\n  },\n  []\n]");
    }

    #[test]
    fn test_display_matches_canonical() {
        let value = Value::Array(vec![Value::Null, Value::Boolean(false)]);
        assert_eq!(value.to_string(), "[null, false]");
    }
}
