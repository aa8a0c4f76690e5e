
//! The window and resolution a graph is sampled at.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Describes the graph window (in mathematical coordinates), its size
/// in pixels, and how many samples are taken per horizontal pixel.
///
/// In JSON the fields are camelCase. `scaleFactor` may be omitted, in
/// which case it is chosen by [`GraphSampleParams::auto_scale_factor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGraphSampleParams")]
pub struct GraphSampleParams {
  x_min: f64,
  x_max: f64,
  y_min: f64,
  y_max: f64,
  w_graph: u32,
  h_graph: u32,
  scale_factor: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGraphSampleParams {
  x_min: f64,
  x_max: f64,
  y_min: f64,
  y_max: f64,
  w_graph: u32,
  h_graph: u32,
  #[serde(default)]
  scale_factor: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GraphParamsError {
  #[error("Scale factor must be at least 1")]
  ZeroScaleFactor,
  #[error("Invalid x range ({min} .. {max})")]
  InvalidXRange { min: f64, max: f64 },
  #[error("Invalid y range ({min} .. {max})")]
  InvalidYRange { min: f64, max: f64 },
  #[error("Graph size must be positive, got {width}x{height}")]
  EmptyGraph { width: u32, height: u32 },
}

impl GraphSampleParams {
  /// Upper bound on the automatically chosen scale factor.
  pub const MAX_SCALE_FACTOR: u32 = 300;

  /// Only the scale factor is checked here; see
  /// [`GraphSampleParams::validate`] for the full check.
  pub fn new(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    w_graph: u32,
    h_graph: u32,
    scale_factor: u32,
  ) -> Result<Self, GraphParamsError> {
    if scale_factor == 0 {
      return Err(GraphParamsError::ZeroScaleFactor);
    }
    Ok(Self { x_min, x_max, y_min, y_max, w_graph, h_graph, scale_factor })
  }

  /// As [`GraphSampleParams::new`], with the scale factor derived from
  /// the x range.
  pub fn with_auto_scale_factor(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    w_graph: u32,
    h_graph: u32,
  ) -> Self {
    let scale_factor = Self::auto_scale_factor(x_min, x_max);
    Self { x_min, x_max, y_min, y_max, w_graph, h_graph, scale_factor }
  }

  /// One sample per pixel for narrow windows, and half a sample per
  /// pixel per unit of width beyond that, never more than
  /// [`GraphSampleParams::MAX_SCALE_FACTOR`]. Always at least 1.
  pub fn auto_scale_factor(x_min: f64, x_max: f64) -> u32 {
    // Saturating cast: a negative or NaN range becomes 0.
    let range = (x_max - x_min).trunc() as u32;
    let factor = if range > 2 { range / 2 } else { 1 };
    factor.min(Self::MAX_SCALE_FACTOR)
  }

  pub fn validate(&self) -> Result<(), GraphParamsError> {
    if self.scale_factor == 0 {
      return Err(GraphParamsError::ZeroScaleFactor);
    }
    if self.x_min.is_nan() || self.x_max.is_nan() || self.x_max <= self.x_min {
      return Err(GraphParamsError::InvalidXRange { min: self.x_min, max: self.x_max });
    }
    if self.y_min.is_nan() || self.y_max.is_nan() || self.y_max <= self.y_min {
      return Err(GraphParamsError::InvalidYRange { min: self.y_min, max: self.y_max });
    }
    if self.w_graph == 0 || self.h_graph == 0 {
      return Err(GraphParamsError::EmptyGraph { width: self.w_graph, height: self.h_graph });
    }
    Ok(())
  }

  pub fn x_min(&self) -> f64 {
    self.x_min
  }

  pub fn x_max(&self) -> f64 {
    self.x_max
  }

  pub fn y_min(&self) -> f64 {
    self.y_min
  }

  pub fn y_max(&self) -> f64 {
    self.y_max
  }

  pub fn w_graph(&self) -> u32 {
    self.w_graph
  }

  pub fn h_graph(&self) -> u32 {
    self.h_graph
  }

  pub fn scale_factor(&self) -> u32 {
    self.scale_factor
  }

  /// Total number of samples, `w_graph * scale_factor`.
  pub fn sample_count(&self) -> usize {
    self.w_graph as usize * self.scale_factor as usize
  }

  /// The x value of every sample, starting at `x_min` and stepping by
  /// `|x_max - x_min| / sample_count()`. `x_max` itself is never
  /// sampled.
  pub fn sample_xs(&self) -> impl Iterator<Item = f64> {
    let count = self.sample_count();
    let step = (self.x_max - self.x_min).abs() / count as f64;
    let x_min = self.x_min;
    (0..count).map(move |i| x_min + i as f64 * step)
  }

  /// Converts a y value to a signed pixel offset from the x axis,
  /// rounding to the nearest pixel. NaN maps to 0 and values out of
  /// range saturate.
  pub fn to_pixel_offset(&self, y: f64) -> i32 {
    let units_per_pixel = (self.y_max - self.y_min).abs() / self.h_graph as f64;
    (y / units_per_pixel).round() as i32
  }
}

impl TryFrom<RawGraphSampleParams> for GraphSampleParams {
  type Error = GraphParamsError;

  fn try_from(raw: RawGraphSampleParams) -> Result<Self, GraphParamsError> {
    match raw.scale_factor {
      Some(scale_factor) => Self::new(raw.x_min, raw.x_max, raw.y_min, raw.y_max, raw.w_graph, raw.h_graph, scale_factor),
      None => Ok(Self::with_auto_scale_factor(raw.x_min, raw.x_max, raw.y_min, raw.y_max, raw.w_graph, raw.h_graph)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn square_params() -> GraphSampleParams {
    GraphSampleParams::new(-3.0, 3.0, -3.0, 3.0, 6, 6, 1).unwrap()
  }

  #[test]
  fn test_zero_scale_factor() {
    assert_eq!(
      GraphSampleParams::new(-3.0, 3.0, -3.0, 3.0, 6, 6, 0),
      Err(GraphParamsError::ZeroScaleFactor),
    );
  }

  #[test]
  fn test_auto_scale_factor() {
    assert_eq!(GraphSampleParams::auto_scale_factor(-1.0, 1.0), 1);
    assert_eq!(GraphSampleParams::auto_scale_factor(0.0, 2.9), 1);
    assert_eq!(GraphSampleParams::auto_scale_factor(-5.0, 5.0), 5);
    assert_eq!(GraphSampleParams::auto_scale_factor(0.0, 7.5), 3);
    assert_eq!(GraphSampleParams::auto_scale_factor(-1000.0, 1000.0), 300);
    assert_eq!(GraphSampleParams::auto_scale_factor(5.0, -5.0), 1);
    assert_eq!(GraphSampleParams::auto_scale_factor(f64::NAN, 1.0), 1);
  }

  #[test]
  fn test_validate() {
    assert_eq!(square_params().validate(), Ok(()));
    assert_eq!(
      GraphSampleParams::new(3.0, -3.0, -3.0, 3.0, 6, 6, 1).unwrap().validate(),
      Err(GraphParamsError::InvalidXRange { min: 3.0, max: -3.0 }),
    );
    assert_eq!(
      GraphSampleParams::new(-3.0, 3.0, 1.0, 1.0, 6, 6, 1).unwrap().validate(),
      Err(GraphParamsError::InvalidYRange { min: 1.0, max: 1.0 }),
    );
    assert_eq!(
      GraphSampleParams::new(-3.0, 3.0, -3.0, 3.0, 0, 6, 1).unwrap().validate(),
      Err(GraphParamsError::EmptyGraph { width: 0, height: 6 }),
    );
  }

  #[test]
  fn test_validate_rejects_nan_bounds() {
    let nan = f64::NAN;
    assert!(matches!(
      GraphSampleParams::new(nan, 3.0, -3.0, 3.0, 6, 6, 1).unwrap().validate(),
      Err(GraphParamsError::InvalidXRange { .. }),
    ));
    assert!(matches!(
      GraphSampleParams::new(-3.0, nan, -3.0, 3.0, 6, 6, 1).unwrap().validate(),
      Err(GraphParamsError::InvalidXRange { .. }),
    ));
    assert!(matches!(
      GraphSampleParams::new(-3.0, 3.0, nan, 3.0, 6, 6, 1).unwrap().validate(),
      Err(GraphParamsError::InvalidYRange { .. }),
    ));
    assert!(matches!(
      GraphSampleParams::new(-3.0, 3.0, -3.0, nan, 6, 6, 1).unwrap().validate(),
      Err(GraphParamsError::InvalidYRange { .. }),
    ));
  }

  #[test]
  fn test_sample_xs() {
    let xs: Vec<_> = square_params().sample_xs().collect();
    assert_eq!(xs, vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0]);

    let params = GraphSampleParams::new(0.0, 1.0, -1.0, 1.0, 2, 10, 2).unwrap();
    assert_eq!(params.sample_count(), 4);
    let xs: Vec<_> = params.sample_xs().collect();
    assert_eq!(xs.len(), 4);
    assert_abs_diff_eq!(xs[3], 0.75);
  }

  #[test]
  fn test_to_pixel_offset() {
    let params = GraphSampleParams::new(-3.0, 3.0, -1.0, 1.0, 6, 100, 1).unwrap();
    assert_eq!(params.to_pixel_offset(0.5), 25);
    assert_eq!(params.to_pixel_offset(-0.504), -25);
    assert_eq!(params.to_pixel_offset(f64::NAN), 0);
    assert_eq!(params.to_pixel_offset(f64::INFINITY), i32::MAX);
    assert_eq!(params.to_pixel_offset(f64::NEG_INFINITY), i32::MIN);
  }

  #[test]
  fn test_deserialize() {
    let params: GraphSampleParams = serde_json::from_str(
      r#"{"xMin": -3, "xMax": 3, "yMin": -3, "yMax": 3, "wGraph": 6, "hGraph": 6, "scaleFactor": 1}"#,
    ).unwrap();
    assert_eq!(params, square_params());
  }

  #[test]
  fn test_deserialize_auto_scale_factor() {
    let params: GraphSampleParams = serde_json::from_str(
      r#"{"xMin": -10, "xMax": 10, "yMin": -3, "yMax": 3, "wGraph": 6, "hGraph": 6}"#,
    ).unwrap();
    assert_eq!(params.scale_factor(), 10);
  }

  #[test]
  fn test_deserialize_rejects_zero_scale_factor() {
    let result = serde_json::from_str::<GraphSampleParams>(
      r#"{"xMin": -3, "xMax": 3, "yMin": -3, "yMax": 3, "wGraph": 6, "hGraph": 6, "scaleFactor": 0}"#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn test_serialize_camel_case() {
    let json = serde_json::to_value(square_params()).unwrap();
    assert_eq!(json["wGraph"], 6);
    assert_eq!(json["scaleFactor"], 1);
  }
}
