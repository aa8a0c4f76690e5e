
//! The closed set of operators understood by the compiler.

mod fixity;
mod precedence;
mod table;

pub use fixity::Fixity;
pub use precedence::Precedence;
pub use table::{SurfaceForm, SurfaceTable};

use std::fmt::{self, Display, Formatter};

/// An operator code. Each code has exactly one canonical character in
/// normalized text, which is also its representation in compiled
/// instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCode {
  Add,
  Subtract,
  Multiply,
  Divide,
  Modulo,
  Power,
  Sqrt,
  Sin,
  Cos,
  Tan,
  Asin,
  Acos,
  Atan,
  Ln,
  Log,
}

impl OperatorCode {
  pub const ALL: [OperatorCode; 15] = [
    OperatorCode::Add,
    OperatorCode::Subtract,
    OperatorCode::Multiply,
    OperatorCode::Divide,
    OperatorCode::Modulo,
    OperatorCode::Power,
    OperatorCode::Sqrt,
    OperatorCode::Sin,
    OperatorCode::Cos,
    OperatorCode::Tan,
    OperatorCode::Asin,
    OperatorCode::Acos,
    OperatorCode::Atan,
    OperatorCode::Ln,
    OperatorCode::Log,
  ];

  /// The single character standing for this operator in canonical
  /// text.
  pub const fn canonical(self) -> char {
    match self {
      OperatorCode::Add => '+',
      OperatorCode::Subtract => '-',
      OperatorCode::Multiply => '*',
      OperatorCode::Divide => '/',
      OperatorCode::Modulo => '%',
      OperatorCode::Power => '^',
      OperatorCode::Sqrt => 'r',
      OperatorCode::Sin => 's',
      OperatorCode::Cos => 'c',
      OperatorCode::Tan => 't',
      OperatorCode::Asin => 'S',
      OperatorCode::Acos => 'C',
      OperatorCode::Atan => 'T',
      OperatorCode::Ln => 'n',
      OperatorCode::Log => 'l',
    }
  }

  pub const fn from_canonical(ch: char) -> Option<OperatorCode> {
    match ch {
      '+' => Some(OperatorCode::Add),
      '-' => Some(OperatorCode::Subtract),
      '*' => Some(OperatorCode::Multiply),
      '/' => Some(OperatorCode::Divide),
      '%' => Some(OperatorCode::Modulo),
      '^' => Some(OperatorCode::Power),
      'r' => Some(OperatorCode::Sqrt),
      's' => Some(OperatorCode::Sin),
      'c' => Some(OperatorCode::Cos),
      't' => Some(OperatorCode::Tan),
      'S' => Some(OperatorCode::Asin),
      'C' => Some(OperatorCode::Acos),
      'T' => Some(OperatorCode::Atan),
      'n' => Some(OperatorCode::Ln),
      'l' => Some(OperatorCode::Log),
      _ => None,
    }
  }

  /// The name of the operator, as typed by the user.
  pub const fn display_name(self) -> &'static str {
    match self {
      OperatorCode::Add => "+",
      OperatorCode::Subtract => "-",
      OperatorCode::Multiply => "*",
      OperatorCode::Divide => "/",
      OperatorCode::Modulo => "%",
      OperatorCode::Power => "^",
      OperatorCode::Sqrt => "√",
      OperatorCode::Sin => "sin",
      OperatorCode::Cos => "cos",
      OperatorCode::Tan => "tan",
      OperatorCode::Asin => "asin",
      OperatorCode::Acos => "acos",
      OperatorCode::Atan => "atan",
      OperatorCode::Ln => "ln",
      OperatorCode::Log => "log",
    }
  }

  pub const fn fixity(self) -> Fixity {
    match self {
      OperatorCode::Add | OperatorCode::Subtract | OperatorCode::Multiply |
      OperatorCode::Divide | OperatorCode::Modulo | OperatorCode::Power => Fixity::Infix,
      OperatorCode::Sqrt | OperatorCode::Sin | OperatorCode::Cos | OperatorCode::Tan |
      OperatorCode::Asin | OperatorCode::Acos | OperatorCode::Atan |
      OperatorCode::Ln | OperatorCode::Log => Fixity::Prefix,
    }
  }

  pub const fn precedence(self) -> Precedence {
    match self {
      OperatorCode::Add | OperatorCode::Subtract => Precedence::ADDITIVE,
      OperatorCode::Multiply | OperatorCode::Divide | OperatorCode::Modulo => Precedence::MULTIPLICATIVE,
      OperatorCode::Power => Precedence::POWER,
      OperatorCode::Sqrt | OperatorCode::Sin | OperatorCode::Cos | OperatorCode::Tan |
      OperatorCode::Asin | OperatorCode::Acos | OperatorCode::Atan |
      OperatorCode::Ln | OperatorCode::Log => Precedence::FUNCTION,
    }
  }

  /// True for the unary math functions.
  pub const fn is_function(self) -> bool {
    self.fixity().is_prefix()
  }

  /// Applies a unary function. Returns `None` if `self` is a binary
  /// operator. Domain errors follow IEEE-754 and are not reported.
  pub fn apply_unary(self, operand: f64) -> Option<f64> {
    let result = match self {
      OperatorCode::Sqrt => operand.sqrt(),
      OperatorCode::Sin => operand.sin(),
      OperatorCode::Cos => operand.cos(),
      OperatorCode::Tan => operand.tan(),
      OperatorCode::Asin => operand.asin(),
      OperatorCode::Acos => operand.acos(),
      OperatorCode::Atan => operand.atan(),
      OperatorCode::Ln => operand.ln(),
      OperatorCode::Log => operand.log10(),
      OperatorCode::Add | OperatorCode::Subtract | OperatorCode::Multiply |
      OperatorCode::Divide | OperatorCode::Modulo | OperatorCode::Power => return None,
    };
    Some(result)
  }

  /// Applies a binary operator. Returns `None` if `self` is a unary
  /// function. Division and modulo by zero produce infinity or NaN.
  pub fn apply_binary(self, left: f64, right: f64) -> Option<f64> {
    let result = match self {
      OperatorCode::Add => left + right,
      OperatorCode::Subtract => left - right,
      OperatorCode::Multiply => left * right,
      OperatorCode::Divide => left / right,
      OperatorCode::Modulo => left % right,
      OperatorCode::Power => left.powf(right),
      OperatorCode::Sqrt | OperatorCode::Sin | OperatorCode::Cos | OperatorCode::Tan |
      OperatorCode::Asin | OperatorCode::Acos | OperatorCode::Atan |
      OperatorCode::Ln | OperatorCode::Log => return None,
    };
    Some(result)
  }
}

impl Display for OperatorCode {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.display_name())
  }
}
