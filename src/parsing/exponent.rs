
//! Rewrites scientific-notation literals (`2e-3`) into explicit power
//! expressions (`(2*0.1^3)`) the converter can parse.

use super::tokenizer::TokenizerState;
use crate::util::count_suffix;

pub const EXPONENT_MARKER: char = 'e';

/// Expands every exponent marker in `text`, first occurrence first,
/// until none remain.
///
/// For each marker, the mantissa is the run of digits and `.`
/// immediately before it, and the exponent is an optional `-` followed
/// by the run of digits immediately after it. The whole literal is
/// bracketed and the marker becomes `*10^`, or `*0.1^` for a negative
/// exponent, so the exponent used is always unsigned. Bracket placement
/// relies only on digit adjacency. A marker with no digits around it is
/// rewritten all the same, and the result will not compile.
pub fn expand(text: &str) -> String {
  let mut text = text.to_owned();
  while let Some(marker) = text.find(EXPONENT_MARKER) {
    text = expand_at(&text, marker);
  }
  text
}

/// Expands the single marker found at byte offset `marker`.
fn expand_at(text: &str, marker: usize) -> String {
  let before = &text[..marker];
  let after = &text[marker + EXPONENT_MARKER.len_utf8()..];

  // Mantissa characters are ASCII, so the char count is a byte count.
  let mantissa_len = count_suffix(before.chars(), is_mantissa_char);
  let (prefix, mantissa) = before.split_at(before.len() - mantissa_len);

  let mut state = TokenizerState::new(after);
  let negative = state.read_literal("-").is_some();
  let exponent = state.read_while(|ch| ch.is_ascii_digit()).as_str();
  let rest = state.remaining();

  let multiplier = if negative { "*0.1^" } else { "*10^" };
  format!("{prefix}({mantissa}{multiplier}{exponent}){rest}")
}

fn is_mantissa_char(ch: char) -> bool {
  ch.is_ascii_digit() || ch == '.'
}
