
//! Rendering of calculation results for the user.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// Number of decimal places a result is rendered with before trailing
/// zeros are trimmed.
pub const RESULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
  #[default]
  Comma,
  Dot,
}

impl DecimalSeparator {
  pub fn as_char(self) -> char {
    match self {
      DecimalSeparator::Comma => ',',
      DecimalSeparator::Dot => '.',
    }
  }
}

impl Display for DecimalSeparator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

/// Renders `value` for display.
///
/// Finite values are printed with six decimals, then trailing zeros
/// and a bare trailing separator are dropped, so `2.5` becomes `2,5`
/// and `36.0` becomes `36`. A result rendered this way can be typed
/// back in as part of a new expression. NaN and the infinities print
/// as `nan`, `inf` and `-inf`.
pub fn format_result(value: f64, separator: DecimalSeparator) -> String {
  if value.is_nan() {
    return String::from("nan");
  }
  if value.is_infinite() {
    return String::from(if value > 0.0 { "inf" } else { "-inf" });
  }
  let text = format!("{:.*}", RESULT_PRECISION, value);
  let text = text.trim_end_matches('0').trim_end_matches('.');
  text.replace('.', &separator.to_string())
}
