
//! Locale-independent parsing of numbers typed by the user, such as
//! the value of `x` or the bounds of a graph.

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid number '{0}'")]
pub struct ParseNumberError(String);

/// Accepts an optional `-`, then either zero or a number without
/// leading zeros, with an optional `.` or `,` decimal separator.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^-?(?:0(?:[.,]\d*)?|[1-9]\d*(?:[.,]\d*)?)$").unwrap()
});

/// Parses `input`, accepting either `.` or `,` as the decimal
/// separator.
pub fn parse_number(input: &str) -> Result<f64, ParseNumberError> {
  let input = input.trim();
  if !NUMBER_RE.is_match(input) {
    return Err(ParseNumberError(input.to_owned()));
  }
  input.replacen(',', ".", 1)
    .parse()
    .map_err(|_| ParseNumberError(input.to_owned()))
}
