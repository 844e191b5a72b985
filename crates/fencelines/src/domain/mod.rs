//! Domain value types: line ranges, their grammar, and the option bags.

pub mod errors;
pub mod model;
pub mod ranges;
