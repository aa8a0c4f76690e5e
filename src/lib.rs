
//! Compiler, evaluator and graph sampler for single-variable
//! calculator expressions.

pub mod display;
pub mod error;
pub mod expr;
pub mod graphics;
pub mod parsing;
pub mod state;
pub mod util;
