
//! Rewrites user-typed expression text into canonical text, where
//! every multi-character surface form is a single operator code.

use super::operator::{OperatorCode, SurfaceTable};
use super::tokenizer::TokenizerState;

/// Normalizes `raw` using the common surface table. See
/// [`normalize_with`].
pub fn normalize(raw: &str) -> String {
  normalize_with(&SurfaceTable::common_forms(), raw)
}

/// Normalizes `raw` against `table`.
///
/// At each position the first matching table entry is replaced by its
/// canonical text; any other character is copied verbatim. A `*` is
/// inserted wherever multiplication is implied (see
/// [`needs_implicit_multiplication`]). The result is always wrapped
/// as `(body)*1`, so it ends on a closed operand. Normalization never
/// fails: characters the compiler does not know survive untouched and
/// are rejected later.
pub fn normalize_with(table: &SurfaceTable, raw: &str) -> String {
  let mut output = String::with_capacity(raw.len() + 4);
  output.push('(');

  let mut state = TokenizerState::new(raw);
  while !state.is_eof() {
    if let Some(form) = table.find_prefix(state.remaining()) {
      state.advance(form.surface().len());
      push_symbol(&mut output, form.canonical());
    } else if let Some(ch) = state.next_char() {
      let mut buf = [0u8; 4];
      push_symbol(&mut output, ch.encode_utf8(&mut buf));
    }
  }

  output.push_str(")*1");
  output
}

fn push_symbol(output: &mut String, symbol: &str) {
  if let Some(next) = symbol.chars().next() {
    if needs_implicit_multiplication(output.chars().next_back(), next) {
      output.push(OperatorCode::Multiply.canonical());
    }
  }
  output.push_str(symbol);
}

/// Whether a `*` belongs between the previously emitted character and
/// the next one: after an operand (digit, `x` or `)`) when a function,
/// `(` or `x` follows, and between `)` and a digit.
pub fn needs_implicit_multiplication(prev: Option<char>, next: char) -> bool {
  let Some(prev) = prev else {
    return false;
  };
  (is_operand_end(prev) && starts_operand(next)) || (prev == ')' && next.is_ascii_digit())
}

fn is_operand_end(ch: char) -> bool {
  ch == 'x' || ch == ')' || ch.is_ascii_digit()
}

fn starts_operand(ch: char) -> bool {
  ch == '(' || ch == 'x' || OperatorCode::from_canonical(ch).is_some_and(|op| op.is_function())
}
