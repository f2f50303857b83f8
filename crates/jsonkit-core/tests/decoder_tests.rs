use jsonkit_core::{decode, decode_with, DecodeOptions, ErrorKind, Map, SyntaxError, Value};

fn decode_err(text: &str) -> SyntaxError {
    match decode(text) {
        Ok(value) => panic!("expected {text:?} to fail, got {value:?}"),
        Err(err) => err,
    }
}

fn assert_kind(text: &str, kind: ErrorKind) {
    let err = decode_err(text);
    assert_eq!(
        err.kind, kind,
        "wrong error kind for {text:?}: {err} (found {:?})",
        err.found
    );
}

// ============================================================================
// Primitive Values (Root-Level)
// ============================================================================

#[test]
fn decode_null() {
    assert_eq!(decode("null").unwrap(), Value::Null);
}

#[test]
fn decode_bool_true() {
    assert_eq!(decode("true").unwrap(), Value::Bool(true));
}

#[test]
fn decode_bool_false() {
    assert_eq!(decode("false").unwrap(), Value::Bool(false));
}

#[test]
fn decode_integer() {
    assert_eq!(decode("42").unwrap(), Value::Number(42.0));
}

#[test]
fn decode_negative_integer() {
    assert_eq!(decode("-7").unwrap(), Value::Number(-7.0));
}

#[test]
fn decode_fraction() {
    assert_eq!(decode("10.01234").unwrap(), Value::Number(10.01234));
}

#[test]
fn decode_exponents() {
    assert_eq!(decode("10e3").unwrap(), Value::Number(10000.0));
    assert_eq!(decode("10E+3").unwrap(), Value::Number(10000.0));
    assert_eq!(decode("10e-3").unwrap(), Value::Number(0.01));
    assert_eq!(decode("-1.5e2").unwrap(), Value::Number(-150.0));
}

#[test]
fn decode_leading_zero_integer_is_accepted() {
    assert_eq!(decode("007").unwrap(), Value::Number(7.0));
}

#[test]
fn decode_simple_string() {
    assert_eq!(decode(r#""hello""#).unwrap(), Value::from("hello"));
}

#[test]
fn decode_empty_string() {
    assert_eq!(decode(r#""""#).unwrap(), Value::from(""));
}

#[test]
fn decode_surrounding_whitespace() {
    assert_eq!(decode(" \t\r\n true \n").unwrap(), Value::Bool(true));
}

#[test]
fn decode_control_characters_as_whitespace() {
    assert_eq!(decode("\u{b}1").unwrap(), Value::Number(1.0));
    assert_eq!(
        decode("[1,\u{0}2]").unwrap(),
        Value::Array(vec![Value::from(1), Value::from(2)])
    );
    assert_eq!(decode("{\u{1f}\"a\"\u{c}:\u{7}null}").unwrap()["a"], Value::Null);
}

#[test]
fn decode_fraction_with_empty_digit_run() {
    assert_eq!(decode("1.").unwrap(), Value::Number(1.0));
    assert_eq!(decode("-.5").unwrap(), Value::Number(-0.5));
    assert_eq!(decode("1.e3").unwrap(), Value::Number(1000.0));
    assert_eq!(decode("[2.,0.]").unwrap(), Value::Array(vec![Value::from(2), Value::from(0)]));
}

// ============================================================================
// Strings and Escapes
// ============================================================================

#[test]
fn decode_all_simple_escapes() {
    let value = decode(r#""q\" b\\ s\/ \b\f\n\r\t""#).unwrap();
    assert_eq!(value, Value::from("q\" b\\ s/ \u{8}\u{c}\n\r\t"));
}

#[test]
fn decode_unicode_escape() {
    assert_eq!(decode(r#""\u0041\u3042""#).unwrap(), Value::from("A\u{3042}"));
}

#[test]
fn decode_unicode_escape_is_case_insensitive() {
    assert_eq!(decode(r#""\u00e9\u00E9""#).unwrap(), Value::from("\u{e9}\u{e9}"));
}

#[test]
fn decode_escaped_surrogate_pair() {
    assert_eq!(decode(r#""\ud83d\ude00""#).unwrap(), Value::from("\u{1F600}"));
}

#[test]
fn decode_lone_surrogate_becomes_replacement() {
    assert_eq!(decode(r#""a\ud800b""#).unwrap(), Value::from("a\u{FFFD}b"));
}

#[test]
fn decode_literal_non_ascii() {
    assert_eq!(
        decode("\"caf\u{e9} \u{4f60}\u{597d} \u{1F600}\"").unwrap(),
        Value::from("caf\u{e9} \u{4f60}\u{597d} \u{1F600}")
    );
}

#[test]
fn decode_unescaped_solidus() {
    assert_eq!(decode(r#""a/b""#).unwrap(), Value::from("a/b"));
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn decode_empty_object() {
    assert_eq!(decode("{}").unwrap(), Value::Object(Map::new()));
    assert_eq!(decode("{   }").unwrap(), Value::Object(Map::new()));
}

#[test]
fn decode_empty_array() {
    assert_eq!(decode("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(decode("[ \n ]").unwrap(), Value::Array(vec![]));
}

#[test]
fn decode_object_members_in_source_order() {
    let value = decode(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn decode_two_distinct_keys() {
    let value = decode(r#"{"a":1,"b":2}"#).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], Value::Number(1.0));
    assert_eq!(map["b"], Value::Number(2.0));
}

#[test]
fn decode_nested_arrays() {
    let value = decode("[[[]], [], [1]]").unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Array(vec![Value::Array(vec![])]),
            Value::Array(vec![]),
            Value::Array(vec![Value::Number(1.0)]),
        ])
    );
}

#[test]
fn decode_rfc8259_image_example() {
    let json = r#"
{
    "Image": {
        "Width":  800,
        "Height": 600,
        "Title":  "View from 15th Floor",
        "Thumbnail": {
            "Url":    "http://www.example.com/image/481989943",
            "Height": 125,
            "Width":  100
        },
        "Animated" : false,
        "IDs": [116, 943, 234, 38793]
    }
}
"#;
    let v = decode(json).unwrap();
    assert_eq!(v["Image"]["Width"], Value::from(800));
    assert_eq!(v["Image"]["Title"], Value::from("View from 15th Floor"));
    assert_eq!(
        v["Image"]["Thumbnail"]["Url"],
        Value::from("http://www.example.com/image/481989943")
    );
    assert_eq!(v["Image"]["Animated"], Value::Bool(false));
    assert_eq!(v["Image"]["IDs"][3], Value::from(38793));
    assert!(v["Image"]["Missing"].is_null());
}

// ============================================================================
// Error Kinds
// ============================================================================

#[test]
fn error_duplicate_key() {
    let err = decode_err(r#"{"a":1,"a":2}"#);
    assert_eq!(err.kind, ErrorKind::DuplicateKey);
    // points at the opening quote of the second "a"
    assert_eq!(err.position, 7);
    assert!(err.message.contains("\"a\""), "{}", err.message);
}

#[test]
fn error_duplicate_key_in_nested_object() {
    assert_kind(r#"[{"k":1},{"k":2,"k":3}]"#, ErrorKind::DuplicateKey);
}

#[test]
fn same_key_in_sibling_objects_is_fine() {
    assert!(decode(r#"[{"k":1},{"k":2}]"#).is_ok());
}

#[test]
fn error_trailing_content() {
    let err = decode_err(r#"{"a":1} ,"#);
    assert_eq!(err.kind, ErrorKind::TrailingContent);
    assert_eq!(err.position, 8);
    assert_eq!(err.found, Some(','));
}

#[test]
fn error_second_document() {
    assert_kind("1 2", ErrorKind::TrailingContent);
    assert_kind("{}{}", ErrorKind::TrailingContent);
    assert_kind("truex", ErrorKind::TrailingContent);
}

#[test]
fn error_empty_input() {
    let err = decode_err("");
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert_eq!(err.position, 0);
    assert_eq!(err.found, None);
}

#[test]
fn error_whitespace_only_input() {
    let err = decode_err("   ");
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert_eq!(err.position, 3);
}

#[test]
fn error_misspelled_words() {
    let err = decode_err("tru");
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert_eq!(err.found, None);

    let err = decode_err("nul1");
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert_eq!(err.position, 3);
    assert_eq!(err.found, Some('1'));

    assert_kind("False", ErrorKind::UnexpectedCharacter);
    assert_kind("undefined", ErrorKind::UnexpectedCharacter);
}

#[test]
fn error_missing_colon() {
    let err = decode_err(r#"{"key" "value"}"#);
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert_eq!(err.found, Some('"'));
    assert_eq!(err.position, 7);
}

#[test]
fn error_missing_comma_between_members() {
    let err = decode_err(r#"{"a": 1 "b": 2}"#);
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);
    assert!(err.message.contains("','"), "{}", err.message);
}

#[test]
fn error_unquoted_key() {
    assert_kind("{a:1}", ErrorKind::UnexpectedCharacter);
}

#[test]
fn error_trailing_commas() {
    assert_kind("[1,]", ErrorKind::UnexpectedCharacter);
    assert_kind(r#"{"a":1,}"#, ErrorKind::UnexpectedCharacter);
}

#[test]
fn error_unclosed_containers() {
    assert_kind("[1, 2", ErrorKind::UnexpectedCharacter);
    assert_kind(r#"{"a": 1"#, ErrorKind::UnexpectedCharacter);
    assert_kind("[", ErrorKind::UnexpectedCharacter);
}

#[test]
fn error_unterminated_string() {
    let err = decode_err(r#""hello"#);
    assert_eq!(err.kind, ErrorKind::BadString);
    assert_eq!(err.position, 6);
    assert_eq!(err.found, None);
}

#[test]
fn error_invalid_escape() {
    let err = decode_err(r#""hello\x""#);
    assert_eq!(err.kind, ErrorKind::BadString);
    assert_eq!(err.found, Some('x'));
}

#[test]
fn error_short_unicode_escape() {
    assert_kind(r#""\u123""#, ErrorKind::BadString);
    assert_kind(r#""\u123G""#, ErrorKind::BadString);
    assert_kind(r#""\u12"#, ErrorKind::BadString);
}

#[test]
fn error_backslash_at_end_of_input() {
    assert_kind("\"abc\\", ErrorKind::BadString);
}

#[test]
fn error_malformed_numbers() {
    assert_kind("-", ErrorKind::BadNumber);
    assert_kind("-x", ErrorKind::BadNumber);
    assert_kind("-.", ErrorKind::BadNumber);
    assert_kind("1e", ErrorKind::BadNumber);
    assert_kind("1e+", ErrorKind::BadNumber);
}

#[test]
fn error_number_overflow() {
    let err = decode_err("[1e400]");
    assert_eq!(err.kind, ErrorKind::BadNumber);
    assert_eq!(err.position, 1);
    assert_eq!(err.found, Some('1'));
}

#[test]
fn error_leading_plus_or_dot() {
    assert_kind("+1", ErrorKind::UnexpectedCharacter);
    assert_kind(".5", ErrorKind::UnexpectedCharacter);
}

#[test]
fn error_display_includes_kind_and_offset() {
    let err = decode_err("[1 2]");
    assert_eq!(
        err.to_string(),
        "unexpected character at offset 3: Expected ',' or ']' instead of '2'"
    );
}

// ============================================================================
// Depth Limits
// ============================================================================

#[test]
fn depth_limit_allows_exactly_max_depth() {
    let options = DecodeOptions::default().with_max_depth(3);
    assert!(decode_with("[[[]]]", &options).is_ok());
    assert!(decode_with(r#"{"a":{"b":{}}}"#, &options).is_ok());
}

#[test]
fn depth_limit_rejects_one_past_max_depth() {
    let options = DecodeOptions::default().with_max_depth(3);
    let err = decode_with("[[[[]]]]", &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthExceeded);
    assert_eq!(err.position, 3);
    assert_eq!(err.found, Some('['));
}

#[test]
fn depth_limit_counts_objects_and_arrays_together() {
    let options = DecodeOptions::default().with_max_depth(2);
    let err = decode_with(r#"{"a":[{"b":1}]}"#, &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthExceeded);
}

#[test]
fn zero_depth_still_accepts_scalars() {
    let options = DecodeOptions::default().with_max_depth(0);
    assert_eq!(decode_with("\"x\"", &options).unwrap(), Value::from("x"));
    assert!(decode_with("[]", &options).is_err());
}

#[test]
fn default_depth_guards_pathological_input() {
    let deep = "[".repeat(100_000);
    let err = decode(&deep).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthExceeded);
    assert_eq!(err.position, jsonkit_core::DEFAULT_MAX_DEPTH);
}

#[test]
fn from_str_decodes() {
    let value: Value = "[true, null]".parse().unwrap();
    assert_eq!(value, Value::Array(vec![Value::Bool(true), Value::Null]));
    assert!("[true,".parse::<Value>().is_err());
}
