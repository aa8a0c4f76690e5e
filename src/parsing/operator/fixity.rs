
//! Fixity declarations for operators.

use std::fmt::{self, Display, Formatter};

/// How an operator takes its arguments. Every function in the
/// language is a prefix operator of one argument; every arithmetic
/// operator is infix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixity {
  Prefix,
  Infix,
}

impl Fixity {
  pub const fn is_prefix(self) -> bool {
    matches!(self, Fixity::Prefix)
  }
}

impl Display for Fixity {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Fixity::Prefix => write!(f, "unary function"),
      Fixity::Infix => write!(f, "binary operator"),
    }
  }
}
