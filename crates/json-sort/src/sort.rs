//! Recursive byte-wise key sorting.
//!
//! Every object is rebuilt with its entries ordered by the UTF-8 bytes of
//! their keys. Object-typed values are sorted the same way at any depth.
//! Arrays are copied as they are: objects inside arrays keep their order.
//!
//! When a key repeats, the last occurrence is the one that survives.

use std::collections::BTreeMap;

use jws_json_value::{encode_utf8, Entry, JsonObject, JsonValue};

/// Return a copy of `input` with entries in ascending key-byte order.
///
/// The input is not modified. Duplicate keys collapse to their last
/// occurrence.
///
/// # Examples
///
/// ```
/// use jws_json_value::JsonObject;
/// use jws_json_sort::sort;
///
/// let obj = JsonObject::from_json_str(r#"{"b":{"y":2,"x":1},"a":1}"#).unwrap();
/// let sorted = sort(&obj);
/// assert_eq!(serde_json::to_string(&sorted).unwrap(), r#"{"a":1,"b":{"x":1,"y":2}}"#);
/// ```
pub fn sort(input: &JsonObject) -> JsonObject {
    let entries = input.entries();

    // Later indexes overwrite earlier ones for the same key.
    let mut order: BTreeMap<&[u8], usize> = BTreeMap::new();
    for (index, entry) in entries.iter().enumerate() {
        order.insert(encode_utf8(entry.key()), index);
    }

    let mut out = JsonObject::with_capacity(order.len());
    for index in order.into_values() {
        let entry = &entries[index];
        let value = match entry.value() {
            JsonValue::Object(obj) => JsonValue::Object(sort(obj)),
            other => other.clone(),
        };
        out.push(entry.key(), value);
    }
    out
}

/// Owning variant of [`sort`]: moves keys and values instead of cloning.
pub fn into_sorted(input: JsonObject) -> JsonObject {
    let mut slots: Vec<Option<Entry>> = input.into_iter().map(Some).collect();

    let picked: Vec<usize> = {
        let mut order: BTreeMap<&[u8], usize> = BTreeMap::new();
        for (index, entry) in slots.iter().enumerate() {
            if let Some(entry) = entry {
                order.insert(encode_utf8(entry.key()), index);
            }
        }
        order.into_values().collect()
    };

    picked
        .into_iter()
        .filter_map(|index| slots[index].take())
        .map(|entry| {
            let (key, value) = entry.into_parts();
            let value = match value {
                JsonValue::Object(obj) => JsonValue::Object(into_sorted(obj)),
                other => other,
            };
            (key, value)
        })
        .collect()
}

/// Sort `value` if it is an object; clone it unchanged otherwise.
///
/// Top-level arrays are not descended into.
pub fn sort_value(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(obj) => JsonValue::Object(sort(obj)),
        other => other.clone(),
    }
}

/// Whether `obj` is already in canonical order.
///
/// Keys must be strictly increasing by bytes, which also rules out
/// duplicates, and every object-typed value must be canonical too.
pub fn is_sorted(obj: &JsonObject) -> bool {
    let ordered = obj
        .entries()
        .windows(2)
        .all(|pair| encode_utf8(pair[0].key()) < encode_utf8(pair[1].key()));

    ordered
        && obj
            .iter()
            .all(|entry| entry.value().as_object().map_or(true, is_sorted))
}
