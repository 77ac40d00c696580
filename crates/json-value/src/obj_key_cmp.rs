use std::cmp::Ordering;

/// UTF-8 byte encoding of an object key.
///
/// A Rust `str` is always valid UTF-8, so the encoding is the string's own
/// bytes and cannot fail.
///
/// # Examples
///
/// ```
/// use jws_json_value::obj_key_cmp::encode_utf8;
///
/// assert_eq!(encode_utf8("z"), &[0x7a]);
/// assert_eq!(encode_utf8("é"), &[0xc3, 0xa9]);
/// ```
pub fn encode_utf8(key: &str) -> &[u8] {
    key.as_bytes()
}

/// Compare two object keys by the byte-wise value of their UTF-8 encoding.
///
/// The first differing byte decides; a key that is a prefix of another sorts
/// first. For valid UTF-8 this matches Unicode code-point order, and it is
/// independent of locale.
///
/// Returns:
/// - `Ordering::Less` if `a` should come before `b`
/// - `Ordering::Greater` if `a` should come after `b`
/// - `Ordering::Equal` if both keys are the same
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use jws_json_value::obj_key_cmp::utf8_key_cmp;
///
/// assert_eq!(utf8_key_cmp("a", "b"), Ordering::Less);
/// assert_eq!(utf8_key_cmp("aa", "b"), Ordering::Less); // not length-first
/// assert_eq!(utf8_key_cmp("é", "z"), Ordering::Greater);
/// ```
pub fn utf8_key_cmp(a: &str, b: &str) -> Ordering {
    encode_utf8(a).cmp(encode_utf8(b))
}
