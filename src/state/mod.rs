
//! The per-session calculator state: the most recently compiled
//! expression and its last scalar result.

use crate::error::Error;
use crate::expr::CompiledExpression;
use crate::graphics::dataset::GraphSampleParams;
use crate::graphics::plot;
use crate::parsing::error::StructuralParseError;

use log::debug;

/// Remembers the most recently compiled expression, so that
/// evaluating the same source again (at a new `x`, or as a new graph)
/// skips compilation. Sources are compared by exact string equality.
///
/// Compilation is atomic: if a new source fails to compile, the
/// previously compiled expression stays in place.
#[derive(Debug, Clone, Default)]
pub struct CompiledExpressionCache {
  current: Option<CacheEntry>,
  compile_count: u64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
  expression: CompiledExpression,
  last_evaluation: Option<Evaluation>,
}

#[derive(Debug, Clone, Copy)]
struct Evaluation {
  x: f64,
  result: f64,
}

impl CompiledExpressionCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Evaluates `source` at `x`. Asking for the same source and `x`
  /// twice in a row returns the remembered result. A NaN `x` is never
  /// equal to itself, so it is always evaluated.
  pub fn get_result(&mut self, source: &str, x: f64) -> Result<f64, Error> {
    let entry = self.entry_for(source)?;
    if let Some(evaluation) = entry.last_evaluation {
      if evaluation.x == x {
        debug!("reusing result for {source:?} at x = {x}");
        return Ok(evaluation.result);
      }
    }
    let result = entry.expression.evaluate(x)?;
    entry.last_evaluation = Some(Evaluation { x, result });
    Ok(result)
  }

  /// Samples `source` over the window described by `params`, producing
  /// exactly `params.sample_count()` pixel offsets. Parameters are
  /// validated before anything is compiled.
  pub fn get_sample_sequence(&mut self, source: &str, params: &GraphSampleParams) -> Result<Vec<i32>, Error> {
    params.validate()?;
    let entry = self.entry_for(source)?;
    let samples = plot::sample_sequence(&entry.expression, params)?;
    Ok(samples)
  }

  /// How many times a source has been compiled successfully.
  pub fn compile_count(&self) -> u64 {
    self.compile_count
  }

  pub fn compiled(&self) -> Option<&CompiledExpression> {
    self.current.as_ref().map(|entry| &entry.expression)
  }

  fn entry_for(&mut self, source: &str) -> Result<&mut CacheEntry, StructuralParseError> {
    match self.current.take() {
      Some(entry) if entry.expression.source() == source => Ok(self.current.insert(entry)),
      previous => {
        debug!("compiling {source:?}");
        match CompiledExpression::compile(source) {
          Ok(expression) => {
            self.compile_count += 1;
            Ok(self.current.insert(CacheEntry { expression, last_evaluation: None }))
          }
          Err(err) => {
            self.current = previous;
            Err(err)
          }
        }
      }
    }
  }
}
