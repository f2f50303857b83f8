//! Helpers for callers that chain the decoder and encoder.
//!
//! Storage-backed readers (cookies, local storage) treat an unreadable
//! payload as "nothing stored yet" and carry on with an empty object;
//! [`decode_or_empty`] packages that policy. [`normalize`] re-emits a
//! document in minimal form.

use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::Result;
use crate::value::{Map, Value};

/// Decode `source`, falling back to an empty object.
///
/// The fallback applies when decoding fails and when the document is falsy:
/// `null`, `false`, zero, or the empty string. Failures are logged at `warn`
/// level and otherwise swallowed.
///
/// ```
/// use jsonkit_core::{decode_or_empty, Value};
///
/// assert_eq!(decode_or_empty(r#"{"theme":"dark"}"#)["theme"], Value::from("dark"));
/// assert_eq!(decode_or_empty("{broken"), Value::Object(Default::default()));
/// assert_eq!(decode_or_empty("0"), Value::Object(Default::default()));
/// ```
pub fn decode_or_empty(source: &str) -> Value {
    match decode(source) {
        Ok(value) if is_falsy(&value) => Value::Object(Map::new()),
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding unreadable JSON payload: {err}");
            Value::Object(Map::new())
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => *n == 0.0 || n.is_nan(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Decode `source` and re-encode it without insignificant whitespace.
///
/// ```
/// use jsonkit_core::normalize;
///
/// assert_eq!(normalize("{ \"a\" : [ 1 , 2.50 ] }").unwrap(), r#"{"a":[1,2.5]}"#);
/// ```
pub fn normalize(source: &str) -> Result<String> {
    let value = decode(source)?;
    Ok(encode(&value))
}
