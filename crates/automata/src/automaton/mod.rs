//! The 1-D marker automaton.
//!
//! - [`rule::Rule`]: the zero, successor, and predecessor rule families
//! - [`evolution`]: synchronous generations, steady-state detection, and the
//!   generation cap

pub mod evolution;
pub mod rule;
