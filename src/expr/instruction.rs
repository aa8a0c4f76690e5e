
use crate::parsing::operator::OperatorCode;

use std::fmt::{self, Display, Formatter};

/// One step of a compiled (postfix) expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
  Push(f64),
  PushVariable,
  PushNegatedVariable,
  ApplyUnary(OperatorCode),
  ApplyBinary(OperatorCode),
}

impl Instruction {
  /// The instruction applying `op` with its natural fixity.
  pub fn apply(op: OperatorCode) -> Self {
    if op.is_function() {
      Instruction::ApplyUnary(op)
    } else {
      Instruction::ApplyBinary(op)
    }
  }
}

/// Displays as a token of reverse Polish notation, using canonical
/// operator codes.
impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Instruction::Push(n) => write!(f, "{n}"),
      Instruction::PushVariable => write!(f, "x"),
      Instruction::PushNegatedVariable => write!(f, "-x"),
      Instruction::ApplyUnary(op) | Instruction::ApplyBinary(op) => write!(f, "{}", op.canonical()),
    }
  }
}
