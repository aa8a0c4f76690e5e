
//! Support for sampling an expression over a graph window.

pub mod dataset;
pub mod plot;
