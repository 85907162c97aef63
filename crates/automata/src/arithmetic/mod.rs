//! Fixed-width arithmetic computed by the marker automaton.
//!
//! Operands are digit strings of `0`/`1`, most significant digit first.
//! Nothing in this module does integer arithmetic on them: `Z`, `S`, and the
//! raw predecessor are automaton runs ([`AutomatonPrimitives`]), and
//! everything else is structural iteration over those runs ([`PeanoOps`]).
//!
//! The free functions use [`Automaton::default`]; build an [`Automaton`]
//! from an [`AutomataConfig`](crate::config::AutomataConfig) to change the
//! generation cap or iteration limit.
//!
//! ```
//! use automata::arithmetic::{add, exp, pred, prod, s, z};
//!
//! assert_eq!(z("0011").unwrap(), "0000");
//! assert_eq!(s("0011").unwrap(), "0100");
//! assert_eq!(pred("0000").unwrap(), "0000");
//! assert_eq!(add("0", "0110").unwrap(), "0110");
//! assert_eq!(prod("0011", "0010").unwrap(), "0110");
//! assert_eq!(exp("0", "0010").unwrap(), "1");
//! ```

pub mod ops;
pub mod primitives;

pub use ops::PeanoOps;
pub use primitives::{Automaton, AutomatonPrimitives};

use alloc::string::String;

use crate::error::Result;

/// `Z(x)`: the zero encoding of `x`'s width.
///
/// # Errors
///
/// `MalformedInput` or `NonConvergence`.
pub fn z(x: &str) -> Result<String> {
    Automaton::default().zero(x)
}

/// `S(x)`: successor, wrapping at all ones.
///
/// # Errors
///
/// `MalformedInput` or `NonConvergence`.
pub fn s(x: &str) -> Result<String> {
    Automaton::default().succ(x)
}

/// `Pred(x)`: predecessor, with `Pred(zero) = zero`.
///
/// # Errors
///
/// `MalformedInput` or `NonConvergence`.
pub fn pred(x: &str) -> Result<String> {
    Automaton::default().pred(x)
}

/// `Add(x, y)`.
///
/// # Errors
///
/// `MalformedInput`, `NonConvergence`, or `RecursionDepthExceeded`.
pub fn add(x: &str, y: &str) -> Result<String> {
    Automaton::default().add(x, y)
}

/// `Prod(x, y)`.
///
/// # Errors
///
/// `MalformedInput`, `NonConvergence`, or `RecursionDepthExceeded`.
pub fn prod(x: &str, y: &str) -> Result<String> {
    Automaton::default().prod(x, y)
}

/// `Exp(x, y)`: `y` to the power `x`.
///
/// # Errors
///
/// `MalformedInput`, `NonConvergence`, or `RecursionDepthExceeded`.
pub fn exp(x: &str, y: &str) -> Result<String> {
    Automaton::default().exp(x, y)
}
