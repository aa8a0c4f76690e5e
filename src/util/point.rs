
//! Structs for manipulating points in 2D space.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point2D {
  pub x: f64,
  pub y: f64,
}

impl Display for Point2D {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(Point2D { x: 0.5, y: -3.0 }.to_string(), "(0.5, -3)");
  }
}
