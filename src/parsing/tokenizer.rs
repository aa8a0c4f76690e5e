
//! Left-to-right cursor over a string, shared by the text passes of
//! the compiler.

use super::source::SourceOffset;

#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

/// A consumed piece of the input, with the offset it began at.
#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input, position: SourceOffset(0) }
  }

  /// The unconsumed portion of the input.
  pub fn remaining(&self) -> &'a str {
    self.input
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  /// Advances by `amount` bytes, stopping at the end of the input, and
  /// returns the skipped text.
  ///
  /// Panics if the new position does not lie on a character boundary.
  pub fn advance(&mut self, amount: usize) -> TokenizerMatch<'a> {
    let amount = amount.min(self.input.len());
    let start = self.position;
    let (prefix, suffix) = self.input.split_at(amount);
    self.position.0 += amount;
    self.input = suffix;
    TokenizerMatch { matched_str: prefix, start }
  }

  /// Consumes and returns one character, or `None` at the end of the
  /// input.
  pub fn next_char(&mut self) -> Option<char> {
    let ch = self.peek()?;
    self.advance(ch.len_utf8());
    Some(ch)
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    self.input.starts_with(literal).then(|| {
      self.advance(literal.len())
    })
  }

  /// Consumes the longest prefix of the remaining input whose
  /// characters all satisfy `predicate`. The match may be empty.
  pub fn read_while<F>(&mut self, mut predicate: F) -> TokenizerMatch<'a>
  where F: FnMut(char) -> bool {
    let amount = self.input
      .char_indices()
      .find(|(_, ch)| !predicate(*ch))
      .map_or(self.input.len(), |(idx, _)| idx);
    self.advance(amount)
  }
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
    self.matched_str
  }

  pub fn start(&self) -> SourceOffset {
    self.start
  }
}
