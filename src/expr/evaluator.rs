
//! Stack machine executing compiled instructions.

use super::instruction::Instruction;
use crate::parsing::error::StructuralParseError;
use crate::parsing::operator::Fixity;

/// Executes postfix instructions against a value of the variable.
///
/// The operand stack is kept between calls so that repeated
/// evaluation (as in a sampling loop) does not allocate.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
  stack: Vec<f64>,
}

impl Evaluator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self { stack: Vec::with_capacity(capacity) }
  }

  /// Evaluates `instructions` with the variable bound to `x`.
  ///
  /// Fails only for malformed sequences: stack underflow, an operator
  /// applied with the wrong fixity, or anything other than exactly one
  /// value left at the end.
  pub fn evaluate(&mut self, instructions: &[Instruction], x: f64) -> Result<f64, StructuralParseError> {
    self.stack.clear();
    for instruction in instructions {
      match *instruction {
        Instruction::Push(n) => self.stack.push(n),
        Instruction::PushVariable => self.stack.push(x),
        Instruction::PushNegatedVariable => self.stack.push(-x),
        Instruction::ApplyUnary(op) => {
          let operand = self.pop(op.canonical())?;
          let result = op.apply_unary(operand)
            .ok_or(StructuralParseError::ArityMismatch(op.canonical(), Fixity::Prefix))?;
          self.stack.push(result);
        }
        Instruction::ApplyBinary(op) => {
          let right = self.pop(op.canonical())?;
          let left = self.pop(op.canonical())?;
          let result = op.apply_binary(left, right)
            .ok_or(StructuralParseError::ArityMismatch(op.canonical(), Fixity::Infix))?;
          self.stack.push(result);
        }
      }
    }
    match self.stack.as_slice() {
      [result] => Ok(*result),
      values => Err(StructuralParseError::UnbalancedStack(values.len())),
    }
  }

  fn pop(&mut self, operator: char) -> Result<f64, StructuralParseError> {
    self.stack.pop().ok_or(StructuralParseError::StackUnderflow(operator))
  }
}

/// Evaluates `instructions` once with a fresh stack.
pub fn evaluate(instructions: &[Instruction], x: f64) -> Result<f64, StructuralParseError> {
  Evaluator::with_capacity(instructions.len()).evaluate(instructions, x)
}
