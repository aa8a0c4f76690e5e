
use super::operator::Fixity;
use super::source::SourceOffset;

use thiserror::Error;

/// The input cannot be interpreted as an expression of this grammar.
///
/// Positions refer to byte offsets in the canonical (normalized and
/// exponent-expanded) text, which is what the converter scans.
/// Mathematically undefined results are never reported through this
/// type; they evaluate to NaN or infinity.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum StructuralParseError {
  #[error("Unexpected character '{0}' at {1}")]
  UnexpectedChar(char, SourceOffset),
  #[error("Malformed number '{0}' at {1}")]
  MalformedNumber(String, SourceOffset),
  #[error("Unpaired closing parenthesis at {0}")]
  UnpairedClosingParen(SourceOffset),
  #[error("Unpaired opening parenthesis at {0}")]
  UnpairedOpeningParen(SourceOffset),
  #[error("Negation at {0} is not followed by an operand")]
  DanglingNegation(SourceOffset),
  #[error("Expression is empty")]
  EmptyExpression,
  #[error("Too few operands for '{0}'")]
  StackUnderflow(char),
  #[error("'{0}' cannot be applied as a {1}")]
  ArityMismatch(char, Fixity),
  #[error("Expected exactly one value after evaluation, found {0}")]
  UnbalancedStack(usize),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    assert_eq!(
      StructuralParseError::UnpairedClosingParen(SourceOffset(3)).to_string(),
      "Unpaired closing parenthesis at 3",
    );
    assert_eq!(
      StructuralParseError::ArityMismatch('+', Fixity::Prefix).to_string(),
      "'+' cannot be applied as a unary function",
    );
    assert_eq!(
      StructuralParseError::UnbalancedStack(2).to_string(),
      "Expected exactly one value after evaluation, found 2",
    );
  }
}
