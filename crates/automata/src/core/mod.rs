//! Core data types: the symbol alphabet and the cell sequence.

pub mod sequence;
pub mod symbol;
