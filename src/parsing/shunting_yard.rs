
//! Shunting yard conversion of canonical infix text into postfix
//! instructions.

use super::error::StructuralParseError;
use super::operator::{OperatorCode, Precedence};
use super::source::SourceOffset;
use super::tokenizer::TokenizerState;
use crate::expr::instruction::Instruction;

/// A value on the operator stack.
#[derive(Clone, Copy, Debug)]
struct OpStackValue {
  item: StackItem,
  position: SourceOffset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StackItem {
  OpenParen,
  Operator(OperatorCode),
}

/// State of one conversion pass.
#[derive(Debug, Default)]
struct Converter {
  output: Vec<Instruction>,
  operator_stack: Vec<OpStackValue>,
  /// Position of a `-` directly after `(`, waiting for the operand it
  /// negates.
  pending_negation: Option<SourceOffset>,
}

/// Compiles canonical text (as produced by the normalizer and the
/// exponent expander) into postfix instructions.
///
/// Operators pop the stack while the top has precedence greater than
/// or equal to their own, so every operator, `^` included, associates
/// to the left: `2^3^2` is `(2^3)^2`.
pub fn compile(canonical: &str) -> Result<Vec<Instruction>, StructuralParseError> {
  let mut converter = Converter::default();
  let mut state = TokenizerState::new(canonical);
  while let Some(ch) = state.peek() {
    let position = state.current_pos();
    match ch {
      ch if is_number_char(ch) => {
        let literal = state.read_while(is_number_char);
        let value: f64 = literal.as_str().parse().map_err(|_| {
          StructuralParseError::MalformedNumber(literal.as_str().to_owned(), literal.start())
        })?;
        converter.push_number(value);
      }
      'x' => {
        state.next_char();
        converter.push_variable();
      }
      '(' => {
        state.next_char();
        converter.open_paren(position, &mut state)?;
      }
      ')' => {
        state.next_char();
        converter.close_paren(position)?;
      }
      ch => {
        let op = OperatorCode::from_canonical(ch)
          .ok_or(StructuralParseError::UnexpectedChar(ch, position))?;
        state.next_char();
        converter.push_operator(op, position)?;
      }
    }
  }
  converter.finish()
}

fn is_number_char(ch: char) -> bool {
  ch.is_ascii_digit() || ch == '.'
}

/// Whether the operator on top of the stack must be emitted before
/// `current` is pushed.
fn compare_precedence(stack_item: StackItem, current: OperatorCode) -> bool {
  stack_item.precedence() >= current.precedence()
}

impl StackItem {
  fn precedence(self) -> Precedence {
    match self {
      StackItem::OpenParen => Precedence::GROUPING,
      StackItem::Operator(op) => op.precedence(),
    }
  }
}

impl Converter {
  fn push_number(&mut self, value: f64) {
    let value = if self.pending_negation.take().is_some() { -value } else { value };
    self.output.push(Instruction::Push(value));
  }

  fn push_variable(&mut self) {
    let instruction = if self.pending_negation.take().is_some() {
      Instruction::PushNegatedVariable
    } else {
      Instruction::PushVariable
    };
    self.output.push(instruction);
  }

  fn open_paren(&mut self, position: SourceOffset, state: &mut TokenizerState<'_>) -> Result<(), StructuralParseError> {
    self.operator_stack.push(OpStackValue { item: StackItem::OpenParen, position });
    let minus_position = state.current_pos();
    if state.read_literal("-").is_some() {
      // A second negation before the first found its operand.
      if let Some(earlier) = self.pending_negation {
        return Err(StructuralParseError::DanglingNegation(earlier));
      }
      self.pending_negation = Some(minus_position);
    }
    Ok(())
  }

  fn close_paren(&mut self, position: SourceOffset) -> Result<(), StructuralParseError> {
    while let Some(stack_value) = self.operator_stack.pop() {
      match stack_value.item {
        StackItem::OpenParen => return Ok(()),
        StackItem::Operator(op) => self.emit_operator(op)?,
      }
    }
    Err(StructuralParseError::UnpairedClosingParen(position))
  }

  fn push_operator(&mut self, op: OperatorCode, position: SourceOffset) -> Result<(), StructuralParseError> {
    while let Some(stack_value) = self.operator_stack.pop() {
      match stack_value.item {
        StackItem::Operator(stack_op) if compare_precedence(stack_value.item, op) => {
          self.emit_operator(stack_op)?;
        }
        _ => {
          self.operator_stack.push(stack_value);
          break;
        }
      }
    }
    self.operator_stack.push(OpStackValue { item: StackItem::Operator(op), position });
    Ok(())
  }

  fn emit_operator(&mut self, op: OperatorCode) -> Result<(), StructuralParseError> {
    if let Some(position) = self.pending_negation {
      return Err(StructuralParseError::DanglingNegation(position));
    }
    self.output.push(Instruction::apply(op));
    Ok(())
  }

  fn finish(mut self) -> Result<Vec<Instruction>, StructuralParseError> {
    while let Some(stack_value) = self.operator_stack.pop() {
      match stack_value.item {
        StackItem::OpenParen => return Err(StructuralParseError::UnpairedOpeningParen(stack_value.position)),
        StackItem::Operator(op) => self.emit_operator(op)?,
      }
    }
    if let Some(position) = self.pending_negation {
      return Err(StructuralParseError::DanglingNegation(position));
    }
    if self.output.is_empty() {
      return Err(StructuralParseError::EmptyExpression);
    }
    Ok(self.output)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::parsing::operator::OperatorCode::*;

  fn un(op: OperatorCode) -> Instruction {
    Instruction::ApplyUnary(op)
  }

  fn bin(op: OperatorCode) -> Instruction {
    Instruction::ApplyBinary(op)
  }

  fn num(n: f64) -> Instruction {
    Instruction::Push(n)
  }

  #[test]
  fn test_simple_sum() {
    assert_eq!(compile("24+12").unwrap(), vec![num(24.0), num(12.0), bin(Add)]);
  }

  #[test]
  fn test_left_assoc_op() {
    assert_eq!(
      compile("1-2-3").unwrap(),
      vec![num(1.0), num(2.0), bin(Subtract), num(3.0), bin(Subtract)],
    );
  }

  #[test]
  fn test_power_is_left_assoc() {
    assert_eq!(
      compile("2^3^2").unwrap(),
      vec![num(2.0), num(3.0), bin(Power), num(2.0), bin(Power)],
    );
  }

  #[test]
  fn test_differing_precedence_higher_on_right() {
    assert_eq!(
      compile("1+2*3").unwrap(),
      vec![num(1.0), num(2.0), num(3.0), bin(Multiply), bin(Add)],
    );
  }

  #[test]
  fn test_differing_precedence_higher_on_left() {
    assert_eq!(
      compile("1*2+3").unwrap(),
      vec![num(1.0), num(2.0), bin(Multiply), num(3.0), bin(Add)],
    );
  }

  #[test]
  fn test_mixed_precedence() {
    assert_eq!(
      compile("24+2^3/4").unwrap(),
      vec![num(24.0), num(2.0), num(3.0), bin(Power), num(4.0), bin(Divide), bin(Add)],
    );
  }

  #[test]
  fn test_parentheses() {
    assert_eq!(
      compile("(1+2)*3").unwrap(),
      vec![num(1.0), num(2.0), bin(Add), num(3.0), bin(Multiply)],
    );
  }

  #[test]
  fn test_functions() {
    assert_eq!(
      compile("s(x)^2").unwrap(),
      vec![Instruction::PushVariable, un(Sin), num(2.0), bin(Power)],
    );
    assert_eq!(
      compile("n(32)/n(2)").unwrap(),
      vec![num(32.0), un(Ln), num(2.0), un(Ln), bin(Divide)],
    );
  }

  #[test]
  fn test_function_binds_tighter_than_power() {
    // Without parentheses a function takes only the next operand.
    assert_eq!(
      compile("r4^2").unwrap(),
      vec![num(4.0), un(Sqrt), num(2.0), bin(Power)],
    );
  }

  #[test]
  fn test_negation_after_paren() {
    assert_eq!(compile("(-3.2)").unwrap(), vec![num(-3.2)]);
    assert_eq!(
      compile("x*(-x)").unwrap(),
      vec![Instruction::PushVariable, Instruction::PushNegatedVariable, bin(Multiply)],
    );
    assert_eq!(
      compile("(-1*(-1))").unwrap(),
      vec![num(-1.0), num(-1.0), bin(Multiply)],
    );
  }

  #[test]
  fn test_negation_reaches_into_function() {
    assert_eq!(compile("(-s(x))").unwrap(), vec![Instruction::PushNegatedVariable, un(Sin)]);
  }

  #[test]
  fn test_dangling_negation() {
    assert_eq!(compile("(-)"), Err(StructuralParseError::DanglingNegation(SourceOffset(1))));
    assert_eq!(compile("(-(-2))"), Err(StructuralParseError::DanglingNegation(SourceOffset(1))));
  }

  #[test]
  fn test_unpaired_parens() {
    assert_eq!(compile("(1+2"), Err(StructuralParseError::UnpairedOpeningParen(SourceOffset(0))));
    assert_eq!(compile("1+2)"), Err(StructuralParseError::UnpairedClosingParen(SourceOffset(3))));
  }

  #[test]
  fn test_unexpected_char() {
    assert_eq!(compile("2+y"), Err(StructuralParseError::UnexpectedChar('y', SourceOffset(2))));
    assert_eq!(compile("2 +1"), Err(StructuralParseError::UnexpectedChar(' ', SourceOffset(1))));
  }

  #[test]
  fn test_malformed_number() {
    assert_eq!(
      compile("1.2.3+1"),
      Err(StructuralParseError::MalformedNumber("1.2.3".to_owned(), SourceOffset(0))),
    );
    assert_eq!(
      compile("(.)"),
      Err(StructuralParseError::MalformedNumber(".".to_owned(), SourceOffset(1))),
    );
  }

  #[test]
  fn test_empty() {
    assert_eq!(compile(""), Err(StructuralParseError::EmptyExpression));
    assert_eq!(compile("()"), Err(StructuralParseError::EmptyExpression));
  }

  #[test]
  fn test_deterministic() {
    let text = "((2*10^2)+s(x)*(-x))*1";
    assert_eq!(compile(text).unwrap(), compile(text).unwrap());
  }
}
