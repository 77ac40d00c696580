use std::collections::BTreeMap;

use crate::value::{JsonObject, JsonValue};

/// Performs a deep equality check between two JSON values.
///
/// Objects compare as key → value maps: entry order is ignored, and when a
/// key repeats only its last value counts. Arrays compare element by
/// element, in order. Numbers compare by their JSON text, so `1.0` and `1`
/// differ.
///
/// # Examples
///
/// ```
/// use jws_json_value::{deep_equal, JsonValue};
///
/// let a: JsonValue = r#"{"a":1,"b":[1,2]}"#.parse().unwrap();
/// let b: JsonValue = r#"{"b":[1,2],"a":0,"a":1}"#.parse().unwrap();
/// let c: JsonValue = r#"{"a":1,"b":[2,1]}"#.parse().unwrap();
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
        (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
        (JsonValue::String(a), JsonValue::String(b)) => a == b,
        (JsonValue::Array(arr_a), JsonValue::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }
        (JsonValue::Object(obj_a), JsonValue::Object(obj_b)) => deep_equal_object(obj_a, obj_b),
        _ => false,
    }
}

/// Object form of [`deep_equal`].
pub fn deep_equal_object(a: &JsonObject, b: &JsonObject) -> bool {
    let map_a = last_wins(a);
    let map_b = last_wins(b);
    if map_a.len() != map_b.len() {
        return false;
    }
    map_a.iter().all(|(key, val_a)| match map_b.get(key) {
        Some(val_b) => deep_equal(val_a, val_b),
        None => false,
    })
}

fn last_wins(obj: &JsonObject) -> BTreeMap<&str, &JsonValue> {
    obj.iter().map(|entry| (entry.key(), entry.value())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> JsonValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_scalars() {
        assert!(deep_equal(&v("1"), &v("1")));
        assert!(!deep_equal(&v("1"), &v("2")));
        assert!(!deep_equal(&v("0"), &v("null")));
        assert!(!deep_equal(&v("1"), &v("true")));
        assert!(!deep_equal(&v(r#""""#), &v("null")));
        assert!(deep_equal(&v(r#""a""#), &v(r#""a""#)));
    }

    #[test]
    fn test_numbers_compare_by_text() {
        assert!(deep_equal(&v("1e2"), &v("1e2")));
        assert!(!deep_equal(&v("1e2"), &v("100")));
    }

    #[test]
    fn test_objects_ignore_order() {
        assert!(deep_equal(&v(r#"{"a":1,"b":"2"}"#), &v(r#"{"b":"2","a":1}"#)));
    }

    #[test]
    fn test_objects_extra_property() {
        assert!(!deep_equal(&v(r#"{"a":1}"#), &v(r#"{"a":1,"c":[]}"#)));
    }

    #[test]
    fn test_objects_last_duplicate_wins() {
        assert!(deep_equal(&v(r#"{"a":1,"a":3}"#), &v(r#"{"a":3}"#)));
        assert!(!deep_equal(&v(r#"{"a":1,"a":3}"#), &v(r#"{"a":1}"#)));
    }

    #[test]
    fn test_arrays_are_ordered() {
        assert!(deep_equal(&v("[1,2,3]"), &v("[1,2,3]")));
        assert!(!deep_equal(&v("[1,2,3]"), &v("[3,2,1]")));
        assert!(!deep_equal(&v("[1,2,3]"), &v("[1,2]")));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!deep_equal(&v("{}"), &v("[]")));
    }

    #[test]
    fn test_nested() {
        let a = v(r#"{"p":{"s":{"x":[1,{"b":1,"a":2}]},"t":"u"},"q":1000}"#);
        let b = v(r#"{"q":1000,"p":{"t":"u","s":{"x":[1,{"a":2,"b":1}]}}}"#);
        assert!(deep_equal(&a, &b));
    }
}
