
use crate::graphics::dataset::GraphParamsError;
use crate::parsing::error::StructuralParseError;
use crate::parsing::number::ParseNumberError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  Parse(#[from] StructuralParseError),
  #[error("{0}")]
  Params(#[from] GraphParamsError),
  #[error("{0}")]
  Number(#[from] ParseNumberError),
}
