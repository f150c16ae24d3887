//! Array-length annotation.
//!
//! The HDL generic decoder has no implicit length word for arrays, so an
//! integer array `[a, b, c]` is sent as `[3, a, b, c]`.
//!
//! Whether an array is prefixed depends only on the type of its first
//! element: an array whose first element is an integer is treated as a
//! homogeneous integer array and its elements are left alone, even if
//! later elements are not integers. Every other array is walked element by
//! element. The transform is single-pass: running it twice prefixes integer
//! arrays twice.

use crate::value::JsonValue;

/// Returns a copy of `value` with every integer-first array length-prefixed.
///
/// # Example
///
/// ```
/// use json_tb_value::{annotate_array_lengths, stringify, JsonValue};
///
/// let cfg = JsonValue::parse(r#"{"a":[1,2,3],"b":"x"}"#).unwrap();
/// let annotated = annotate_array_lengths(&cfg);
/// assert_eq!(stringify(&annotated).unwrap(), r#"{"a":[3,1,2,3],"b":"x"}"#);
/// ```
pub fn annotate_array_lengths(value: &JsonValue) -> JsonValue {
    value.clone().into_annotated()
}

impl JsonValue {
    /// Consuming form of [`annotate_array_lengths`]; reuses the tree's
    /// allocations.
    pub fn into_annotated(self) -> JsonValue {
        match self {
            JsonValue::Array(arr) => {
                if arr.first().is_some_and(JsonValue::is_integer) {
                    let mut out = Vec::with_capacity(arr.len() + 1);
                    out.push(JsonValue::from(arr.len() as u64));
                    out.extend(arr);
                    JsonValue::Array(out)
                } else {
                    JsonValue::Array(arr.into_iter().map(JsonValue::into_annotated).collect())
                }
            }
            JsonValue::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, v.into_annotated()))
                    .collect(),
            ),
            scalar => scalar,
        }
    }
}
