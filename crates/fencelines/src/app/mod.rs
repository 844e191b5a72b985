//! Application layer: the line filter and the two pipeline stages.

pub mod filter;
pub mod render;
pub mod validate;
