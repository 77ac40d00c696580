//! serde adapters for the value model.
//!
//! Serialization writes objects in entry order, duplicates included.
//! Deserialization pushes map entries in source order without merging, so
//! `{"a":1,"a":2}` reads back as two entries.
//!
//! With serde_json's `arbitrary_precision` feature a number arrives as a
//! one-entry map keyed by `NUMBER_TOKEN` whose value is the number's source
//! text. That text is kept verbatim, so `1e2` stays `1e2`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

use crate::error::ValueError;
use crate::value::{JsonObject, JsonValue};

/// Map key serde_json uses to carry a number's source text.
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(n) => n.serialize(serializer),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in self {
            map.serialize_entry(entry.key(), entry.value())?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<JsonValue, E> {
        Ok(JsonValue::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<JsonValue, E> {
        Ok(JsonValue::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<JsonValue, E> {
        Ok(JsonValue::Number(v.into()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<JsonValue, E> {
        // Non-finite floats have no JSON form.
        Ok(Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number))
    }

    fn visit_str<E>(self, v: &str) -> Result<JsonValue, E> {
        Ok(JsonValue::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<JsonValue, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_none<E>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<JsonValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_unit<E>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<JsonValue, A::Error> {
        let mut arr = Vec::new();
        while let Some(item) = seq.next_element()? {
            arr.push(item);
        }
        Ok(JsonValue::Array(arr))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JsonValue, A::Error> {
        let first = match map.next_key::<String>()? {
            Some(key) => key,
            None => return Ok(JsonValue::Object(JsonObject::new())),
        };
        if first == NUMBER_TOKEN {
            let text: String = map.next_value()?;
            let number = serde_json::from_str::<Number>(&text).map_err(de::Error::custom)?;
            return Ok(JsonValue::Number(number));
        }

        let mut obj = JsonObject::new();
        obj.push(first, map.next_value::<JsonValue>()?);
        push_entries(&mut obj, map)?;
        Ok(JsonValue::Object(obj))
    }
}

fn push_entries<'de, A>(obj: &mut JsonObject, mut map: A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
        obj.push(key, value);
    }
    Ok(())
}

struct ObjectVisitor;

impl<'de> Visitor<'de> for ObjectVisitor {
    type Value = JsonObject;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<JsonObject, A::Error> {
        let mut obj = JsonObject::new();
        push_entries(&mut obj, map)?;
        Ok(obj)
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ObjectVisitor)
    }
}

impl JsonObject {
    /// Parse JSON text whose top level must be an object.
    ///
    /// Duplicate keys are kept as separate entries in source order.
    ///
    /// # Examples
    ///
    /// ```
    /// use jws_json_value::JsonObject;
    ///
    /// let obj = JsonObject::from_json_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    /// assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    ///
    /// assert!(JsonObject::from_json_str("[1, 2]").is_err());
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self, ValueError> {
        expect_object(serde_json::from_str(s)?)
    }

    /// Byte-slice variant of [`JsonObject::from_json_str`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ValueError> {
        expect_object(serde_json::from_slice(bytes)?)
    }
}

fn expect_object(value: JsonValue) -> Result<JsonObject, ValueError> {
    match value {
        JsonValue::Object(obj) => Ok(obj),
        other => Err(ValueError::NotAnObject { found: other.kind() }),
    }
}

impl FromStr for JsonValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl FromStr for JsonObject {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JsonObject::from_json_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_keeps_source_order() {
        let obj = JsonObject::from_json_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }

    #[test]
    fn parse_keeps_duplicate_keys() {
        let obj: JsonObject = r#"{"a":1,"b":2,"a":3}"#.parse().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.get(2).map(|e| e.value()), Some(&JsonValue::from(3i64)));
    }

    #[test]
    fn parse_nested_values() {
        let value: JsonValue = r#"{"a":[1,"x",null,true,{"b":1.5}]}"#.parse().unwrap();
        let obj = value.as_object().unwrap();
        let arr = obj.find("a").and_then(JsonValue::as_array).unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[1], JsonValue::from("x"));
        assert_eq!(arr[2], JsonValue::Null);
        assert!(arr[4].is_object());
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        let err = JsonObject::from_json_str("[1,2]").unwrap_err();
        assert!(matches!(err, ValueError::NotAnObject { found: "array" }));
        let err = JsonObject::from_json_str("\"hello\"").unwrap_err();
        assert!(matches!(err, ValueError::NotAnObject { found: "string" }));
    }

    #[test]
    fn number_text_is_kept_verbatim() {
        let text = r#"{"e":1e2,"f":1.50,"u":18446744073709551616,"p":0.1000000000000000055511151231257827,"i":-0}"#;
        let obj = JsonObject::from_json_str(text).unwrap();
        assert_eq!(serde_json::to_string(&obj).unwrap(), text);
    }

    #[test]
    fn value_parse_errors_use_value_error() {
        let err = "{".parse::<JsonValue>().unwrap_err();
        assert!(matches!(err, ValueError::Json(_)));
    }

    #[test]
    fn malformed_text_is_a_json_error() {
        let err = JsonObject::from_json_slice(b"{\"a\":").unwrap_err();
        assert!(matches!(err, ValueError::Json(_)));
    }

    #[test]
    fn serialize_writes_entry_order_and_duplicates() {
        let obj: JsonObject = vec![("b", 1i64), ("a", 2i64), ("b", 3i64)]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&obj).unwrap(), r#"{"b":1,"a":2,"b":3}"#);
    }

    #[test]
    fn serialize_scalars() {
        let obj = JsonObject::from_json_str(r#"{"n":null,"t":true,"i":-7,"f":0.25,"s":"q\"uote"}"#)
            .unwrap();
        assert_eq!(
            serde_json::to_string(&obj).unwrap(),
            r#"{"n":null,"t":true,"i":-7,"f":0.25,"s":"q\"uote"}"#
        );
    }
}
