//! JSON encoder: turns a [`Value`] (or any [`Serializable`]) into minimal JSON text.
//!
//! Output has no insignificant whitespace. Strings are quoted with a fixed
//! escape set:
//!
//! - `"` and `\` plus the short escapes `\b \t \n \f \r`
//! - `\uXXXX` (lowercase hex) for the remaining C0/C1 controls, the soft
//!   hyphen, and a list of invisible format/bidi code points that break
//!   JavaScript string literals or get stripped in transit
//!
//! Everything else, including non-ASCII text, is emitted verbatim. Numbers
//! follow the ECMAScript Number-to-String layout, so `1e21` encodes as
//! `1e+21` and `0.1 + 0.2` as `0.30000000000000004`.
//!
//! # Example
//! ```
//! use jsonkit_core::{encode, Value};
//!
//! let value: Value = vec![Value::from("caf\u{e9}"), Value::from(1.5), Value::Null].into();
//! assert_eq!(encode(&value), "[\"caf\u{e9}\",1.5,null]");
//! ```

use std::convert::Infallible;
use std::fmt::Write;

use crate::error::EncodeError;
use crate::options::EncodeOptions;
use crate::value::{Serializable, Value};

/// Code points escaped as `\uXXXX` unless they have a short escape.
/// Inclusive ranges, sorted.
static UNICODE_ESCAPED: &[(char, char)] = &[
    ('\u{0000}', '\u{001f}'),
    ('\u{007f}', '\u{009f}'),
    ('\u{00ad}', '\u{00ad}'),
    ('\u{0600}', '\u{0604}'),
    ('\u{070f}', '\u{070f}'),
    ('\u{17b4}', '\u{17b5}'),
    ('\u{200c}', '\u{200f}'),
    ('\u{2028}', '\u{202f}'),
    ('\u{2060}', '\u{206f}'),
    ('\u{feff}', '\u{feff}'),
    ('\u{fff0}', '\u{ffff}'),
];

/// Encode a value into JSON text.
///
/// Never fails. Containers are walked without a depth limit; use
/// [`encode_with`] to bound recursion on untrusted trees.
pub fn encode<S: Serializable + ?Sized>(value: &S) -> String {
    let mut out = String::new();
    let Ok(()) = write_value(&value.to_json(), 0, &Unlimited, &mut out);
    out
}

/// Encode a value into JSON text, failing if containers nest deeper than
/// `options.max_depth`.
pub fn encode_with<S: Serializable + ?Sized>(
    value: &S,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    let replacement = value.to_json();
    let mut out = String::new();
    match options.max_depth {
        Some(limit) => write_value(&replacement, 0, &AtMost(limit), &mut out)?,
        None => {
            let Ok(()) = write_value(&replacement, 0, &Unlimited, &mut out);
        }
    }
    Ok(out)
}

/// Quote and escape a string as a JSON string literal.
pub fn encode_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_string(s, &mut out);
    out
}

/// Nesting policy for the recursive walk.
trait DepthLimit {
    type Error;

    /// Called before opening a container with `depth` containers already open.
    fn check(&self, depth: usize) -> Result<(), Self::Error>;
}

struct Unlimited;

impl DepthLimit for Unlimited {
    type Error = Infallible;

    fn check(&self, _depth: usize) -> Result<(), Infallible> {
        Ok(())
    }
}

struct AtMost(usize);

impl DepthLimit for AtMost {
    type Error = EncodeError;

    fn check(&self, depth: usize) -> Result<(), EncodeError> {
        let limit = self.0;
        if depth >= limit {
            log::debug!("encode aborted: nesting exceeds {limit}");
            return Err(EncodeError::DepthExceeded { limit });
        }
        Ok(())
    }
}

/// Recursive walk. `depth` is the number of containers already open.
fn write_value<L: DepthLimit>(
    value: &Value,
    depth: usize,
    limit: &L,
    out: &mut String,
) -> Result<(), L::Error> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            limit.check(depth)?;
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, depth + 1, limit, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            limit.check(depth)?;
            out.push('{');
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(member, depth + 1, limit, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match short_escape(ch) {
            Some(esc) => out.push_str(esc),
            None if needs_unicode_escape(ch) => {
                // Writing into a String cannot fail.
                let _ = write!(out, "\\u{:04x}", u32::from(ch));
            }
            None => out.push(ch),
        }
    }
    out.push('"');
}

fn short_escape(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0008}' => Some("\\b"),
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\u{000c}' => Some("\\f"),
        '\r' => Some("\\r"),
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

fn needs_unicode_escape(ch: char) -> bool {
    UNICODE_ESCAPED
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&ch))
}

/// Format a number the way ECMAScript `Number.prototype.toString` does:
///
/// - NaN and infinities become `null`
/// - `-0` prints as `0`
/// - shortest round-trip digits
/// - plain notation while the decimal exponent is in `[-7, 21)`, otherwise
///   `d.ddde+n` / `d.ddde-n`
fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3".
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    // value = 0.d1d2...dk × 10^point
    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let point = exponent + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }

    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-point) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = point - 1;
        out.push('e');
        out.push(if e > 0 { '+' } else { '-' });
        out.push_str(&e.abs().to_string());
    }
    out
}
