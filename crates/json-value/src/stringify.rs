//! Canonical compact serialization.
//!
//! The output is the standard JSON grammar with no whitespace at all: `,`
//! between items and `:` between a key and its value. Object keys are
//! written in insertion order, so two documents that differ only in key
//! order serialize differently; normalize key order before building the
//! value when byte-stable output is needed.

use thiserror::Error;

use crate::escape::escape;
use crate::value::{JsonValue, Number};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodingError {
    /// NaN and infinities have no JSON spelling.
    #[error("number {value} at \"{}\" has no JSON representation", format_location(.path))]
    NonFiniteNumber { value: f64, path: Vec<String> },
}

impl EncodingError {
    /// Prefixes the error location with the step that led to it.
    fn within(mut self, step: String) -> Self {
        match &mut self {
            EncodingError::NonFiniteNumber { path, .. } => path.insert(0, step),
        }
        self
    }
}

/// Formats a location as a JSON Pointer (RFC 6901).
fn format_location(path: &[String]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(&step.replace('~', "~0").replace('/', "~1"));
    }
    out
}

/// Serialize `value` to its canonical compact string.
///
/// # Errors
///
/// Returns [`EncodingError::NonFiniteNumber`] if the tree holds a NaN or
/// infinite float. Values produced by [`JsonValue::parse`] never do.
///
/// # Example
///
/// ```
/// use json_tb_value::{stringify, JsonValue};
///
/// let doc = JsonValue::parse(r#"{ "a" : [1, 2, 3], "b" : "x" }"#).unwrap();
/// assert_eq!(stringify(&doc).unwrap(), r#"{"a":[1,2,3],"b":"x"}"#);
/// ```
pub fn stringify(value: &JsonValue) -> Result<String, EncodingError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &JsonValue) -> Result<(), EncodingError> {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Number(n) => write_number(out, n)?,
        JsonValue::String(s) => write_str(out, s),
        JsonValue::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item).map_err(|e| e.within(i.to_string()))?;
            }
            out.push(']');
        }
        JsonValue::Object(obj) => {
            out.push('{');
            for (i, (key, val)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_str(out, key);
                out.push(':');
                write_value(out, val).map_err(|e| e.within(key.clone()))?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_number(out: &mut String, n: &Number) -> Result<(), EncodingError> {
    match *n {
        Number::Int(i) => out.push_str(&i.to_string()),
        Number::UInt(u) => out.push_str(&u.to_string()),
        Number::BigInt(ref text) => out.push_str(text),
        Number::Float(f) => {
            // serde_json picks the shortest form that parses back to `f`.
            let n = serde_json::Number::from_f64(f).ok_or(EncodingError::NonFiniteNumber {
                value: f,
                path: Vec::new(),
            })?;
            out.push_str(&n.to_string());
        }
    }
    Ok(())
}

fn write_str(out: &mut String, s: &str) {
    out.push('"');
    out.push_str(&escape(s));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(v: serde_json::Value) -> JsonValue {
        JsonValue::from(v)
    }

    #[test]
    fn null_value() {
        assert_eq!(stringify(&JsonValue::Null).unwrap(), "null");
    }

    #[test]
    fn bool_values() {
        assert_eq!(stringify(&doc(json!(true))).unwrap(), "true");
        assert_eq!(stringify(&doc(json!(false))).unwrap(), "false");
    }

    #[test]
    fn number_values() {
        assert_eq!(stringify(&doc(json!(42))).unwrap(), "42");
        assert_eq!(stringify(&doc(json!(-1))).unwrap(), "-1");
        assert_eq!(stringify(&doc(json!(3.25))).unwrap(), "3.25");
        assert_eq!(stringify(&doc(json!(1.0))).unwrap(), "1.0");
        assert_eq!(stringify(&doc(json!(u64::MAX))).unwrap(), "18446744073709551615");
    }

    #[test]
    fn string_value() {
        assert_eq!(stringify(&doc(json!("hello"))).unwrap(), r#""hello""#);
        assert_eq!(stringify(&doc(json!("say \"hi\""))).unwrap(), r#""say \"hi\"""#);
    }

    #[test]
    fn empty_containers() {
        assert_eq!(stringify(&doc(json!([]))).unwrap(), "[]");
        assert_eq!(stringify(&doc(json!({}))).unwrap(), "{}");
    }

    #[test]
    fn object_keeps_insertion_order() {
        let val = JsonValue::parse(r#"{"b": 2, "a": 1, "c": 3}"#).unwrap();
        assert_eq!(stringify(&val).unwrap(), r#"{"b":2,"a":1,"c":3}"#);
    }

    #[test]
    fn nested_containers() {
        let val = JsonValue::parse(r#"{"z": {"b": [true, null]}, "a": [[], {}]}"#).unwrap();
        assert_eq!(
            stringify(&val).unwrap(),
            r#"{"z":{"b":[true,null]},"a":[[],{}]}"#
        );
    }

    #[test]
    fn non_finite_float_is_rejected_with_location() {
        let mut obj = crate::Object::new();
        obj.insert(
            "a/b".to_owned(),
            JsonValue::Array(vec![JsonValue::Null, JsonValue::from(f64::INFINITY)]),
        );
        let err = stringify(&JsonValue::Object(obj)).unwrap_err();
        match &err {
            EncodingError::NonFiniteNumber { value, path } => {
                assert!(value.is_infinite());
                assert_eq!(path, &vec!["a/b".to_string(), "1".to_string()]);
            }
        }
        assert_eq!(
            err.to_string(),
            "number inf at \"/a~1b/1\" has no JSON representation"
        );
    }

    #[test]
    fn nan_at_root() {
        let err = stringify(&JsonValue::from(f64::NAN)).unwrap_err();
        assert!(matches!(err, EncodingError::NonFiniteNumber { ref path, .. } if path.is_empty()));
    }
}
