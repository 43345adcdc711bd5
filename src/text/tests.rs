#![cfg(test)]

use super::*;
use crate::outcome::{Error, ParseError};

#[test]
fn test_parse_int() {
    assert_eq!(parse_int("0").value(), 0);
    assert_eq!(parse_int("+17").value(), 17);
    assert_eq!(parse_int("-9223372036854775808").value(), i64::MIN);

    assert!(parse_int("").is_err());
    assert!(parse_int(" 1").is_err(), "Whitespace shouldn't be trimmed.");
    assert!(parse_int("9223372036854775808").is_err(), "Overflow should be reported.");
    assert!(parse_int("1.5").is_err());
}

#[test]
fn test_parse_float() {
    assert_eq!(parse_float("2.5").value(), 2.5);
    assert_eq!(parse_float("-1e3").value(), -1000.0);
    assert!(parse_float("inf").value().is_infinite());
    assert!(parse_float("one").is_err());
}

#[test]
fn test_parse_bool() {
    assert!(parse_bool("true").value());
    assert!(!parse_bool("false").value());
    assert!(parse_bool("True").is_err(), "Only the lowercase forms should be accepted.");
    assert!(parse_bool("1").is_err());
}

#[test]
fn test_parse_error() {
    let failed = parse_int("abc");

    match failed.error() {
        Error::Parse(ParseError { input, target }) => {
            assert_eq!(input, "abc");
            assert_eq!(*target, "i64");
        },
        other => panic!("Unexpected error: {other}"),
    }
    assert_eq!(failed.error().to_string(), "Cannot convert 'abc' to i64!");
    assert!(parse_bool("yes").value_or(true));
}
