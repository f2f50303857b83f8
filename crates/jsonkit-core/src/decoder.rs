//! Recursive-descent JSON decoder over a single forward-only cursor.
//!
//! The parser holds one lookahead character (`ch`) and its byte offset
//! (`at`). Every production inspects `ch`, consumes what it recognizes with
//! `advance`/`expect`, and leaves the cursor on the first character it did
//! not consume. The first malformed token aborts the whole parse with a
//! [`SyntaxError`] pointing at the offending character.
//!
//! # Key design decisions
//!
//! - **Duplicate keys are errors**, not last-write-wins.
//! - **Lenient lexing**: any character `<= ' '` separates tokens, integer
//!   runs may carry leading zeros, and a number needs digits on only one
//!   side of its `.` (`1.`, `-.5`). Exponents still need a digit.
//! - **Strings are assembled as UTF-16**: each `\uXXXX` escape is one code
//!   unit, so an escaped surrogate pair joins into one character and an
//!   unpaired surrogate decodes to U+FFFD.
//! - **Bounded nesting**: opening a container beyond
//!   [`DecodeOptions::max_depth`] fails with `DepthExceeded` instead of
//!   growing the stack without limit.

use crate::error::{ErrorKind, Result, SyntaxError};
use crate::options::DecodeOptions;
use crate::value::{Map, Value};
use std::str::CharIndices;

/// Decode JSON text into a [`Value`] using the default options.
///
/// The input must hold exactly one value; only whitespace may surround it.
///
/// ```
/// use jsonkit_core::{decode, ErrorKind};
///
/// let value = decode(r#"{"id": 7, "tags": ["a", "b"]}"#).unwrap();
/// assert_eq!(value["tags"][1].as_str(), Some("b"));
///
/// let err = decode(r#"{"a":1,"a":2}"#).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::DuplicateKey);
/// ```
pub fn decode(source: &str) -> Result<Value> {
    decode_with(source, &DecodeOptions::default())
}

/// Decode JSON text into a [`Value`] with explicit limits.
pub fn decode_with(source: &str, options: &DecodeOptions) -> Result<Value> {
    let mut parser = Parser::new(source, options.max_depth);
    let result = parser.document();
    if let Err(err) = &result {
        log::debug!("decode failed: {err}");
    }
    result
}

struct Parser<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    /// Byte offset of `ch`, or `text.len()` once the input is exhausted.
    at: usize,
    ch: Option<char>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, max_depth: usize) -> Self {
        let mut parser = Self {
            text,
            chars: text.char_indices(),
            at: 0,
            ch: None,
            depth: 0,
            max_depth,
        };
        parser.advance();
        parser
    }

    /// Move to the next character.
    fn advance(&mut self) {
        match self.chars.next() {
            Some((idx, c)) => {
                self.at = idx;
                self.ch = Some(c);
            }
            None => {
                self.at = self.text.len();
                self.ch = None;
            }
        }
    }

    /// Consume `c`, or fail if the current character is something else.
    fn expect(&mut self, c: char) -> Result<()> {
        if self.ch != Some(c) {
            return Err(self.unexpected(&format!("'{c}'")));
        }
        self.advance();
        Ok(())
    }

    fn error(&self, kind: ErrorKind, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(kind, message, self.at, self.ch)
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        self.error(
            ErrorKind::UnexpectedCharacter,
            format!("Expected {expected} instead of {}", self.describe_current()),
        )
    }

    fn describe_current(&self) -> String {
        match self.ch {
            Some(c) => format!("{c:?}"),
            None => "end of input".to_string(),
        }
    }

    /// Whitespace is any character up to and including space, so stray C0
    /// controls (NUL, vertical tab, ...) between tokens are skipped too.
    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some('\0'..=' ')) {
            self.advance();
        }
    }

    fn document(&mut self) -> Result<Value> {
        let value = self.value()?;
        self.skip_whitespace();
        if let Some(c) = self.ch {
            return Err(self.error(
                ErrorKind::TrailingContent,
                format!("Unexpected {c:?} after the top-level value"),
            ));
        }
        Ok(value)
    }

    fn value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.ch {
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some('"') => self.string().map(Value::String),
            Some('-' | '0'..='9') => self.number().map(Value::Number),
            _ => self.word(),
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.error(
                ErrorKind::DepthExceeded,
                format!("Nesting deeper than {} levels", self.max_depth),
            ));
        }
        self.depth += 1;
        log::trace!("enter container at offset {} (depth {})", self.at, self.depth);
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn object(&mut self) -> Result<Value> {
        self.enter()?;
        self.expect('{')?;
        let mut map = Map::new();
        self.skip_whitespace();
        if self.ch == Some('}') {
            self.advance();
            self.leave();
            return Ok(Value::Object(map));
        }
        loop {
            let key_at = self.at;
            let key = self.string()?;
            self.skip_whitespace();
            self.expect(':')?;
            if map.contains_key(&key) {
                return Err(SyntaxError::new(
                    ErrorKind::DuplicateKey,
                    format!("Duplicate key {key:?}"),
                    key_at,
                    Some('"'),
                ));
            }
            let member = self.value()?;
            map.insert(key, member);
            self.skip_whitespace();
            match self.ch {
                Some('}') => {
                    self.advance();
                    break;
                }
                Some(',') => {
                    self.advance();
                    self.skip_whitespace();
                }
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }
        self.leave();
        Ok(Value::Object(map))
    }

    fn array(&mut self) -> Result<Value> {
        self.enter()?;
        self.expect('[')?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.ch == Some(']') {
            self.advance();
            self.leave();
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.value()?);
            self.skip_whitespace();
            match self.ch {
                Some(']') => {
                    self.advance();
                    break;
                }
                Some(',') => self.advance(),
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn string(&mut self) -> Result<String> {
        self.expect('"')?;
        let mut buf = Utf16Buffer::default();
        loop {
            match self.ch {
                None => return Err(self.error(ErrorKind::BadString, "Unterminated string")),
                Some('"') => {
                    self.advance();
                    return Ok(buf.finish());
                }
                Some('\\') => {
                    self.advance();
                    match self.ch {
                        Some('u') => {
                            let unit = self.hex_escape()?;
                            buf.push_unit(unit);
                        }
                        Some(c) => {
                            let Some(unescaped) = simple_escape(c) else {
                                return Err(self.error(
                                    ErrorKind::BadString,
                                    format!("Bad escape sequence '\\{c}'"),
                                ));
                            };
                            buf.push_char(unescaped);
                            self.advance();
                        }
                        None => {
                            return Err(self.error(ErrorKind::BadString, "Unterminated string"))
                        }
                    }
                }
                Some(c) => {
                    buf.push_char(c);
                    self.advance();
                }
            }
        }
    }

    /// Read the four hex digits after `\u`. The cursor starts on the `u`
    /// and ends on the character after the last digit.
    fn hex_escape(&mut self) -> Result<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            self.advance();
            let digit = self
                .ch
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error(ErrorKind::BadString, "Bad unicode escape"))?;
            // to_digit(16) is at most 15
            unit = (unit << 4) | digit as u16;
        }
        self.advance();
        Ok(unit)
    }

    fn number(&mut self) -> Result<f64> {
        let start = self.at;
        let first = self.ch;
        if self.ch == Some('-') {
            self.advance();
        }
        // Either run may be empty (`1.`, `-.5`) but not both.
        let mut mantissa = self.digit_run();
        if self.ch == Some('.') {
            self.advance();
            mantissa += self.digit_run();
        }
        if mantissa == 0 {
            return Err(self.missing_digit());
        }
        if matches!(self.ch, Some('e' | 'E')) {
            self.advance();
            if matches!(self.ch, Some('+' | '-')) {
                self.advance();
            }
            if self.digit_run() == 0 {
                return Err(self.missing_digit());
            }
        }
        let literal = &self.text[start..self.at];
        match literal.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(SyntaxError::new(
                ErrorKind::BadNumber,
                format!("Bad number {literal}"),
                start,
                first,
            )),
        }
    }

    /// Consume a run of ASCII digits and return its length.
    fn digit_run(&mut self) -> usize {
        let start = self.at;
        while matches!(self.ch, Some('0'..='9')) {
            self.advance();
        }
        self.at - start
    }

    fn missing_digit(&self) -> SyntaxError {
        self.error(
            ErrorKind::BadNumber,
            format!("Bad number: expected a digit instead of {}", self.describe_current()),
        )
    }

    /// `true`, `false` or `null`, matched one character at a time.
    fn word(&mut self) -> Result<Value> {
        let (literal, value) = match self.ch {
            Some('t') => ("true", Value::Bool(true)),
            Some('f') => ("false", Value::Bool(false)),
            Some('n') => ("null", Value::Null),
            _ => {
                return Err(self.error(
                    ErrorKind::UnexpectedCharacter,
                    format!("Unexpected {}", self.describe_current()),
                ))
            }
        };
        for c in literal.chars() {
            self.expect(c)?;
        }
        Ok(value)
    }
}

/// The single-character escapes after a backslash.
fn simple_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

/// String accumulator that accepts both whole characters and raw UTF-16
/// code units from `\u` escapes. A high surrogate waits for the next unit;
/// anything unpaired becomes U+FFFD.
#[derive(Default)]
struct Utf16Buffer {
    out: String,
    high: Option<u16>,
}

impl Utf16Buffer {
    fn push_char(&mut self, c: char) {
        self.flush_high();
        self.out.push(c);
    }

    fn push_unit(&mut self, unit: u16) {
        match unit {
            0xD800..=0xDBFF => {
                self.flush_high();
                self.high = Some(unit);
            }
            0xDC00..=0xDFFF => match self.high.take() {
                Some(high) => {
                    let combined = 0x10000
                        + ((u32::from(high) - 0xD800) << 10)
                        + (u32::from(unit) - 0xDC00);
                    self.out
                        .push(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                None => self.out.push(char::REPLACEMENT_CHARACTER),
            },
            _ => {
                self.flush_high();
                self.out
                    .push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
        }
    }

    fn flush_high(&mut self) {
        if self.high.take().is_some() {
            self.out.push(char::REPLACEMENT_CHARACTER);
        }
    }

    fn finish(mut self) -> String {
        self.flush_high();
        self.out
    }
}
