
//! Functionality for producing two-dimensional plots of expressions.

use super::dataset::GraphSampleParams;
use crate::expr::CompiledExpression;
use crate::expr::evaluator::Evaluator;
use crate::parsing::error::StructuralParseError;
use crate::util::point::Point2D;

use log::debug;
use serde::{Serialize, Deserialize};

/// Evaluates `expr` at every sample position of `params` and converts
/// each result to a pixel offset. The instructions are replayed on a
/// single evaluator; the first evaluation error aborts the run.
pub fn sample_sequence(
  expr: &CompiledExpression,
  params: &GraphSampleParams,
) -> Result<Vec<i32>, StructuralParseError> {
  debug!("sampling {:?} at {} points", expr.source(), params.sample_count());
  let mut evaluator = Evaluator::with_capacity(expr.instructions().len());
  params.sample_xs()
    .map(|x| {
      evaluator.evaluate(expr.instructions(), x)
        .map(|y| params.to_pixel_offset(y))
    })
    .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotDirective {
  pub points: Vec<Point2D>,
}

impl PlotDirective {
  pub fn empty() -> PlotDirective {
    PlotDirective { points: Vec::new() }
  }

  /// Pairs each sample with the horizontal pixel it falls in, which is
  /// the sample index divided (rounding down) by the scale factor.
  pub fn from_samples(samples: &[i32], params: &GraphSampleParams) -> PlotDirective {
    let scale_factor = params.scale_factor() as usize;
    let points = samples.iter()
      .enumerate()
      .map(|(i, &y)| Point2D { x: (i / scale_factor) as f64, y: f64::from(y) })
      .collect();
    PlotDirective { points }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn square_params(scale_factor: u32) -> GraphSampleParams {
    GraphSampleParams::new(-3.0, 3.0, -3.0, 3.0, 6, 6, scale_factor).unwrap()
  }

  #[test]
  fn test_sample_linear() {
    let expr = CompiledExpression::compile("x+x").unwrap();
    assert_eq!(sample_sequence(&expr, &square_params(1)).unwrap(), vec![-6, -4, -2, 0, 2, 4]);
  }

  #[test]
  fn test_sample_count_follows_scale_factor() {
    let expr = CompiledExpression::compile("x").unwrap();
    let samples = sample_sequence(&expr, &square_params(2)).unwrap();
    assert_eq!(samples.len(), 12);
    assert_eq!(samples[..4], [-3, -3, -2, -2]);
  }

  #[test]
  fn test_sample_undefined_values() {
    // sqrt is NaN left of zero, which lands on the axis.
    let expr = CompiledExpression::compile("√(x)").unwrap();
    assert_eq!(sample_sequence(&expr, &square_params(1)).unwrap(), vec![0, 0, 0, 0, 1, 1]);
    let expr = CompiledExpression::compile("1/x").unwrap();
    assert_eq!(sample_sequence(&expr, &square_params(1)).unwrap()[3], i32::MAX);
  }

  #[test]
  fn test_sample_propagates_evaluation_error() {
    let expr = CompiledExpression::compile("x2").unwrap();
    assert_eq!(
      sample_sequence(&expr, &square_params(1)),
      Err(StructuralParseError::UnbalancedStack(2)),
    );
  }

  #[test]
  fn test_plot_directive_from_samples() {
    let plot = PlotDirective::from_samples(&[-3, -3, -2], &square_params(2));
    assert_eq!(plot.points, vec![
      Point2D { x: 0.0, y: -3.0 },
      Point2D { x: 0.0, y: -3.0 },
      Point2D { x: 1.0, y: -2.0 },
    ]);
    assert_eq!(PlotDirective::from_samples(&[], &square_params(1)), PlotDirective::empty());
  }
}
