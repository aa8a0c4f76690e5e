
//! Turning user-typed text into postfix instructions.
//!
//! The passes run in order: [`normalizer`] produces canonical text,
//! [`exponent`] expands scientific notation, and [`shunting_yard`]
//! converts the result to instructions.

pub mod error;
pub mod exponent;
pub mod normalizer;
pub mod number;
pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod tokenizer;
pub mod validation;
