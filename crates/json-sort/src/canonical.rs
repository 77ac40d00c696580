//! Canonical encoding - deterministic JSON text for signing input.
//!
//! Each helper sorts first and then hands the result to `serde_json`, which
//! writes entries in the order they are held. Two objects that differ only
//! in key order therefore encode to the same bytes.

use jws_json_value::JsonObject;

use crate::error::SortError;
use crate::sort::sort;

/// Compact canonical JSON text of `obj`.
///
/// # Examples
///
/// ```
/// use jws_json_value::JsonObject;
/// use jws_json_sort::to_canonical_string;
///
/// let a = JsonObject::from_json_str(r#"{"typ":"JWT","alg":"ES256"}"#).unwrap();
/// let b = JsonObject::from_json_str(r#"{"alg":"ES256","typ":"JWT"}"#).unwrap();
/// assert_eq!(to_canonical_string(&a).unwrap(), to_canonical_string(&b).unwrap());
/// ```
pub fn to_canonical_string(obj: &JsonObject) -> Result<String, SortError> {
    Ok(serde_json::to_string(&sort(obj))?)
}

/// Compact canonical JSON bytes of `obj`, ready for hashing or base64url.
pub fn to_canonical_vec(obj: &JsonObject) -> Result<Vec<u8>, SortError> {
    Ok(serde_json::to_vec(&sort(obj))?)
}

/// Indented canonical JSON text of `obj`.
pub fn to_canonical_string_pretty(obj: &JsonObject) -> Result<String, SortError> {
    Ok(serde_json::to_string_pretty(&sort(obj))?)
}

/// Parse `text` as an object, keeping duplicate keys, and re-encode it in
/// canonical form.
pub fn canonicalize_str(text: &str) -> Result<String, SortError> {
    let obj = JsonObject::from_json_str(text)?;
    to_canonical_string(&obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jws_json_value::ValueError;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object() {
        assert_eq!(canonicalize_str("{}").unwrap(), "{}");
    }

    #[test]
    fn whitespace_and_order_removed() {
        let text = r#"{ "b" : [ 3, 1, 2 ], "a" : { "y" : true, "x" : null } }"#;
        assert_eq!(
            canonicalize_str(text).unwrap(),
            r#"{"a":{"x":null,"y":true},"b":[3,1,2]}"#
        );
    }

    #[test]
    fn duplicate_keys_collapse() {
        assert_eq!(canonicalize_str(r#"{"a":1,"b":2,"a":3}"#).unwrap(), r#"{"a":3,"b":2}"#);
    }

    #[test]
    fn number_text_is_not_normalized() {
        let text = r#"{"n":18446744073709551616,"e":1e2,"f":1.50,"p":0.1000000000000000055511151231257827}"#;
        assert_eq!(
            canonicalize_str(text).unwrap(),
            r#"{"e":1e2,"f":1.50,"n":18446744073709551616,"p":0.1000000000000000055511151231257827}"#
        );
    }

    #[test]
    fn bytes_match_string() {
        let obj = JsonObject::from_json_str(r#"{"é":1,"z":2}"#).unwrap();
        let bytes = to_canonical_vec(&obj).unwrap();
        assert_eq!(bytes, to_canonical_string(&obj).unwrap().into_bytes());
        assert_eq!(bytes, "{\"z\":2,\"é\":1}".as_bytes());
    }

    #[test]
    fn pretty_output() {
        let obj = JsonObject::from_json_str(r#"{"b":1,"a":{"d":2,"c":3}}"#).unwrap();
        assert_eq!(
            to_canonical_string_pretty(&obj).unwrap(),
            "{\n  \"a\": {\n    \"c\": 3,\n    \"d\": 2\n  },\n  \"b\": 1\n}"
        );
    }

    #[test]
    fn non_object_text_is_rejected() {
        let err = canonicalize_str("[1]").unwrap_err();
        assert!(matches!(err, SortError::Value(ValueError::NotAnObject { found: "array" })));
        assert_eq!(err.to_string(), "expected a JSON object, found array");
    }
}
