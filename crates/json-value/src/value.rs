//! [`JsonValue`]: the in-memory document shared by every encoder.

use std::str::FromStr;

use indexmap::IndexMap;

/// Object storage: unique keys, insertion order kept for serialization.
///
/// `IndexMap` equality ignores order, which is the equality documents need.
pub type Object = IndexMap<String, JsonValue>;

/// A JSON number, tagged by how it was written.
///
/// `1` parses to [`Number::Int`] and `1.0` to [`Number::Float`]; the
/// array-length annotator relies on that distinction. Integers keep their
/// exact value whatever their size.
#[derive(Debug, Clone)]
pub enum Number {
    /// Integer that fits in `i64`.
    Int(i64),
    /// Integer above `i64::MAX`.
    UInt(u64),
    /// Integer outside both `i64` and `u64`, as its decimal text.
    BigInt(String),
    /// Anything written with a fraction or exponent.
    Float(f64),
}

impl Number {
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_) | Number::UInt(_) | Number::BigInt(_))
    }

    /// Nearest `f64`; lossy for large integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::UInt(u) => *u as f64,
            Number::BigInt(text) => text.parse().unwrap_or(f64::NAN),
            Number::Float(f) => *f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::UInt(a), Number::UInt(b)) => a == b,
            (Number::Int(a), Number::UInt(b)) | (Number::UInt(b), Number::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            // JSON integer text has a single spelling per value.
            (Number::BigInt(a), Number::BigInt(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<u64> for Number {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::UInt(u),
        }
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            return Number::Int(i);
        }
        if let Some(u) = n.as_u64() {
            return Number::UInt(u);
        }
        // `arbitrary_precision` keeps the literal as written.
        let text = n.to_string();
        let digits = text.strip_prefix('-').unwrap_or(&text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Number::BigInt(text)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// A JSON document node.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(Object),
}

impl JsonValue {
    /// Parses JSON text.
    ///
    /// Parsing is delegated to `serde_json`; when a key repeats inside one
    /// object the last occurrence wins.
    ///
    /// # Example
    ///
    /// ```
    /// use json_tb_value::{JsonValue, Number};
    ///
    /// let doc = JsonValue::parse(r#"{"a": [1, 2.5]}"#).unwrap();
    /// let arr = doc.get("a").and_then(JsonValue::as_array).unwrap();
    /// assert_eq!(arr[0], JsonValue::Number(Number::Int(1)));
    /// assert_eq!(arr[1], JsonValue::Number(Number::Float(2.5)));
    /// ```
    pub fn parse(text: &str) -> Result<JsonValue, serde_json::Error> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        Ok(JsonValue::from(raw))
    }

    /// Returns `true` for integer numbers. Booleans are never integers.
    pub fn is_integer(&self) -> bool {
        matches!(self, JsonValue::Number(n) if n.is_integer())
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` when `self` is an object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

impl FromStr for JsonValue {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JsonValue::parse(s)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(Number::from(&n)),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<i64> for JsonValue {
    fn from(i: i64) -> Self {
        JsonValue::Number(Number::from(i))
    }
}

impl From<u64> for JsonValue {
    fn from(u: u64) -> Self {
        JsonValue::Number(Number::from(u))
    }
}

impl From<f64> for JsonValue {
    fn from(f: f64) -> Self {
        JsonValue::Number(Number::from(f))
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}

impl From<Object> for JsonValue {
    fn from(obj: Object) -> Self {
        JsonValue::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_and_floats_are_distinct() {
        let doc = JsonValue::from(json!([1, 1.0, -3, 18446744073709551615u64]));
        let arr = doc.as_array().unwrap();
        assert_eq!(arr[0], JsonValue::Number(Number::Int(1)));
        assert_eq!(arr[1], JsonValue::Number(Number::Float(1.0)));
        assert_eq!(arr[2], JsonValue::Number(Number::Int(-3)));
        assert_eq!(arr[3], JsonValue::Number(Number::UInt(u64::MAX)));
        assert!(arr[0].is_integer());
        assert!(!arr[1].is_integer());
    }

    #[test]
    fn integers_beyond_u64_stay_exact() {
        let doc = JsonValue::parse("[100000000000000000000, -9223372036854775809, 1e20]").unwrap();
        let arr = doc.as_array().unwrap();
        assert_eq!(
            arr[0],
            JsonValue::Number(Number::BigInt("100000000000000000000".to_string()))
        );
        assert_eq!(
            arr[1],
            JsonValue::Number(Number::BigInt("-9223372036854775809".to_string()))
        );
        assert_eq!(arr[2], JsonValue::Number(Number::Float(1e20)));
        assert!(arr[0].is_integer());
        assert!(arr[1].is_integer());
        assert!(!arr[2].is_integer());
        assert_ne!(arr[0], arr[2]);
    }

    #[test]
    fn negative_zero_is_an_integer() {
        assert_eq!(JsonValue::parse("-0").unwrap(), JsonValue::from(0i64));
        assert_eq!(
            JsonValue::parse("-0.0").unwrap(),
            JsonValue::Number(Number::Float(-0.0))
        );
    }

    #[test]
    fn booleans_are_not_integers() {
        assert!(!JsonValue::Bool(true).is_integer());
        assert!(!JsonValue::Bool(false).is_integer());
    }

    #[test]
    fn number_equality_crosses_integer_tags() {
        assert_eq!(Number::Int(7), Number::UInt(7));
        assert_ne!(Number::Int(-1), Number::UInt(u64::MAX));
        assert_ne!(Number::Int(1), Number::Float(1.0));
        assert_eq!(Number::from(5u64), Number::Int(5));
    }

    #[test]
    fn object_equality_ignores_key_order() {
        let a = JsonValue::parse(r#"{"x":1,"y":2}"#).unwrap();
        let b = JsonValue::parse(r#"{"y":2,"x":1}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn object_keeps_insertion_order() {
        let doc = JsonValue::parse(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let doc = JsonValue::parse(r#"{"k":1,"k":2}"#).unwrap();
        assert_eq!(doc.get("k"), Some(&JsonValue::from(2i64)));
        assert_eq!(doc.as_object().unwrap().len(), 1);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        assert!(JsonValue::parse("[1,").is_err());
        assert!("{\"a\"}".parse::<JsonValue>().is_err());
    }
}
