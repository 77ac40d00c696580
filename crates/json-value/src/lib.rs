//! jws-json-value - ordered JSON value model
//!
//! The generic JSON data model used by the JWS header and payload tooling.
//! Objects are kept as ordered vectors of entries so that source order and
//! duplicate keys stay observable until canonicalization decides what to do
//! with them.
//!
//! # Example
//!
//! ```
//! use jws_json_value::{JsonObject, JsonValue};
//!
//! let header = JsonObject::from_json_str(r#"{"typ":"JWT","alg":"ES256"}"#).unwrap();
//! assert_eq!(header.keys().collect::<Vec<_>>(), vec!["typ", "alg"]);
//! assert_eq!(header.find("alg").and_then(JsonValue::as_str), Some("ES256"));
//! ```

mod codec;
mod convert;
pub mod error;
pub mod json_equal;
pub mod obj_key_cmp;
pub mod value;

pub use error::ValueError;
pub use json_equal::{deep_equal, deep_equal_object};
pub use obj_key_cmp::{encode_utf8, utf8_key_cmp};
pub use value::{Entry, JsonObject, JsonValue};
