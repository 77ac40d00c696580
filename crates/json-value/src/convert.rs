//! Conversions between the value model and `serde_json::Value`.
//!
//! `serde_json::Map` cannot hold a key twice, so converting a [`JsonObject`]
//! with duplicate keys into a `serde_json::Value` keeps only the last value
//! for each key, at the position where the key was first seen.

use serde_json::{Map, Value};

use crate::error::ValueError;
use crate::value::{JsonObject, JsonValue};

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonValue::Number(n.clone()),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(arr) => JsonValue::Array(arr.iter().map(JsonValue::from).collect()),
            Value::Object(obj) => JsonValue::Object(JsonObject::from(obj)),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => JsonValue::Number(n),
            Value::String(s) => JsonValue::String(s),
            Value::Array(arr) => JsonValue::Array(arr.into_iter().map(JsonValue::from).collect()),
            Value::Object(obj) => JsonValue::Object(JsonObject::from(obj)),
        }
    }
}

impl From<&Map<String, Value>> for JsonObject {
    fn from(map: &Map<String, Value>) -> Self {
        map.iter().map(|(k, v)| (k.clone(), JsonValue::from(v))).collect()
    }
}

impl From<Map<String, Value>> for JsonObject {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect()
    }
}

impl TryFrom<Value> for JsonObject {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(obj) => Ok(JsonObject::from(obj)),
            other => Err(ValueError::NotAnObject {
                found: JsonValue::from(&other).kind(),
            }),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Value::Object(Map::from(obj)),
        }
    }
}

impl From<JsonObject> for Map<String, Value> {
    fn from(obj: JsonObject) -> Self {
        let mut map = Map::with_capacity(obj.len());
        for entry in obj {
            let (key, value) = entry.into_parts();
            map.insert(key, Value::from(value));
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn from_value_keeps_map_order() {
        let obj = JsonObject::try_from(json!({"b": 1, "a": {"d": 2, "c": 3}})).unwrap();
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        let inner = obj.find("a").and_then(JsonValue::as_object).unwrap();
        assert_eq!(inner.keys().collect::<Vec<_>>(), vec!["d", "c"]);
    }

    #[test]
    fn try_from_rejects_non_objects() {
        let err = JsonObject::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ValueError::NotAnObject { found: "array" }));
        let err = JsonObject::try_from(json!(null)).unwrap_err();
        assert!(matches!(err, ValueError::NotAnObject { found: "null" }));
    }

    #[test]
    fn round_trip_through_serde_json_value() {
        let original = json!({
            "string": "hello",
            "number": 42,
            "float": 1.5,
            "bool": true,
            "null": null,
            "array": [1, {"z": 0, "y": 1}],
            "object": {"nested": "value"}
        });
        let value = JsonValue::from(&original);
        assert_eq!(Value::from(value), original);
    }

    #[test]
    fn duplicates_collapse_to_last_value() {
        let obj = JsonObject::from_json_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        let map = Map::from(obj);
        assert_eq!(Value::Object(map), json!({"a": 3, "b": 2}));
    }
}
