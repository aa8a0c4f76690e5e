
//! Compiled expressions and their evaluation.

pub mod evaluator;
pub mod instruction;

use instruction::Instruction;
use evaluator::Evaluator;
use crate::parsing::{exponent, normalizer, shunting_yard};
use crate::parsing::error::StructuralParseError;

use itertools::Itertools;
use log::trace;

use std::fmt::{self, Display, Formatter};

/// The postfix instructions compiled from one source string. Built
/// once, never mutated; a different source means a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
  source: String,
  instructions: Vec<Instruction>,
}

impl CompiledExpression {
  /// Runs the full pipeline on `source`: normalization, exponent
  /// expansion, then conversion to postfix. The instruction list of a
  /// successful compilation is never empty.
  pub fn compile(source: &str) -> Result<Self, StructuralParseError> {
    let normalized = normalizer::normalize(source);
    trace!("normalized {source:?} to {normalized:?}");
    let expanded = exponent::expand(&normalized);
    trace!("expanded exponents to {expanded:?}");
    let instructions = shunting_yard::compile(&expanded)?;
    Ok(Self { source: source.to_owned(), instructions })
  }

  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn instructions(&self) -> &[Instruction] {
    &self.instructions
  }

  pub fn uses_variable(&self) -> bool {
    self.instructions.iter().any(|instruction| {
      matches!(instruction, Instruction::PushVariable | Instruction::PushNegatedVariable)
    })
  }

  /// Evaluates once at `x`. For repeated evaluation, reuse an
  /// [`Evaluator`] instead.
  pub fn evaluate(&self, x: f64) -> Result<f64, StructuralParseError> {
    Evaluator::with_capacity(self.instructions.len()).evaluate(&self.instructions, x)
  }
}

/// Displays the instructions in reverse Polish notation.
impl Display for CompiledExpression {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.instructions.iter().join(" "))
  }
}
