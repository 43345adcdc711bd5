use std::any;
use std::str::FromStr;

use crate::outcome::{self, ParseError};

/// Parses a base 10 signed integer. Surrounding whitespace isn't accepted.
///
/// # Examples
/// ```
/// # use sx::text::parse_int;
/// assert_eq!(parse_int("-42").value(), -42);
/// assert!(parse_int("4x2").error().is_parse());
/// ```
pub fn parse_int(text: &str) -> outcome::Result<i64> {
    parse(text)
}

/// Parses a floating point number, including `inf` and `NaN` in the forms accepted by
/// [`f64::from_str`].
pub fn parse_float(text: &str) -> outcome::Result<f64> {
    parse(text)
}

/// Parses exactly `true` or `false`.
pub fn parse_bool(text: &str) -> outcome::Result<bool> {
    parse(text)
}

fn parse<T: FromStr>(text: &str) -> outcome::Result<T> {
    match text.parse() {
        Ok(value) => outcome::Result::ok(value),
        Err(_) => outcome::Result::from_error(ParseError {
            input: text.to_owned(),
            target: any::type_name::<T>(),
        }),
    }
}
