//! jws-json-sort - canonical key ordering for JSON objects
//!
//! Signing and verification of JSON structures (JWS headers, PASSporT
//! payloads) need a deterministic encoding. This crate reorders object
//! entries by the byte-wise value of each key's UTF-8 encoding, recursively
//! through object-typed values, and offers helpers that encode the result.
//!
//! # Example
//!
//! ```
//! use jws_json_value::JsonObject;
//! use jws_json_sort::{is_sorted, sort, to_canonical_string};
//!
//! let header = JsonObject::from_json_str(r#"{"x5u":"https://cert","typ":"passport","alg":"ES256"}"#).unwrap();
//! assert!(!is_sorted(&header));
//!
//! let sorted = sort(&header);
//! assert!(is_sorted(&sorted));
//! assert_eq!(
//!     to_canonical_string(&header).unwrap(),
//!     r#"{"alg":"ES256","typ":"passport","x5u":"https://cert"}"#
//! );
//! ```

pub mod canonical;
pub mod cli;
pub mod error;
pub mod sort;

pub use canonical::{
    canonicalize_str, to_canonical_string, to_canonical_string_pretty, to_canonical_vec,
};
pub use error::SortError;
pub use sort::{into_sorted, is_sorted, sort, sort_value};
