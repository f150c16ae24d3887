//! JSON value model and the encoders that turn a configuration document into
//! a test-bench generic string.
//!
//! - [`JsonValue`]: tagged document tree, loaded through `serde_json`
//! - [`stringify`]: canonical compact, ASCII-only serialization
//! - [`annotate_array_lengths`]: length-prefixes integer arrays for the HDL
//!   side, which has no implicit array length
//!
//! # Example
//!
//! ```
//! use json_tb_value::{annotate_array_lengths, stringify, JsonValue};
//!
//! let cfg: JsonValue = r#"{"a": [1, 2, 3], "b": "x"}"#.parse().unwrap();
//! assert_eq!(stringify(&cfg).unwrap(), r#"{"a":[1,2,3],"b":"x"}"#);
//! assert_eq!(
//!     stringify(&annotate_array_lengths(&cfg)).unwrap(),
//!     r#"{"a":[3,1,2,3],"b":"x"}"#
//! );
//! ```

mod annotate;
mod escape;
mod stringify;
mod value;

pub use annotate::annotate_array_lengths;
pub use escape::escape;
pub use stringify::{stringify, EncodingError};
pub use value::{JsonValue, Number, Object};
