//! Marker automata and the arithmetic they compute.
//!
//! A digit string plus one trailing marker `#` is evolved by one of three
//! rule families until no cell changes. The marker travels one cell per
//! generation, carrying or borrowing as it goes, so the steady state is the
//! zero image, successor, or predecessor of the input.
//!
//! # Execution Model
//!
//! ```text
//! encode("0011")  ->  0 0 1 1 #
//! generation 1    ->  0 0 1 # _        carry moves left
//! generation 2    ->  0 0 # 0 _
//! generation 3    ->  0 1 0 0 _        increment lands
//! generation 4    ->  0 1 0 0 _        identical: stable
//! decode          ->  "0100"
//! ```
//!
//! Addition, multiplication, and exponentiation are then built purely from
//! those runs; see [`arithmetic`].
//!
//! # Example: Evolution
//!
//! ```
//! use automata::{encode, run_to_stable, Rule};
//!
//! let stable = run_to_stable(encode("0111").unwrap(), Rule::Successor, None).unwrap();
//! assert_eq!(stable.decoded(), "1000");
//! ```
//!
//! # Example: Arithmetic
//!
//! ```
//! use automata::arithmetic::{add, exp};
//!
//! assert_eq!(add("0010", "0011").unwrap(), "0101");
//! assert_eq!(exp("0010", "0011").unwrap(), "1001"); // 3^2
//! ```
//!
//! # Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`symbol`], [`sequence`] | alphabet, cell sequence, neighbor lookup, encode/decode |
//! | [`rule`], [`evolution`] | rule families, generations, steady-state detection |
//! | [`arithmetic`] | `Z`, `S`, `Pred`, `Add`, `Prod`, `Exp` |
//! | [`life`] | the independent 2-D life grid |
//! | [`config`] | generation caps, iteration limits, display settings |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

extern crate alloc;

// Alphabet and cell sequence
mod core;

// Rule families and the evolution loop
mod automaton;

// Fixed-width arithmetic over automaton runs
pub mod arithmetic;

// Runtime configuration
pub mod config;

// Error taxonomy
pub mod error;

// 2-D life grid
pub mod life;

pub use crate::automaton::evolution;
pub use crate::automaton::rule;
pub use crate::core::sequence;
pub use crate::core::symbol;

pub use crate::automaton::evolution::{
    default_generation_cap, evolve_one_generation, run_to_stable, Evolution, EvolutionState,
    Stable,
};
pub use crate::automaton::rule::Rule;
pub use crate::core::sequence::{decode, encode, CellSequence};
pub use crate::core::symbol::Symbol;

pub use crate::config::AutomataConfig;
pub use crate::error::{Error, Malformed, Result};
pub use crate::life::{LifeCell, LifeGrid};

/// Prelude module for convenient imports.
///
/// ```
/// use automata::prelude::*;
///
/// let automaton = Automaton::default();
/// assert_eq!(automaton.succ("1").unwrap(), "0");
/// ```
pub mod prelude {
    pub use crate::arithmetic::{Automaton, AutomatonPrimitives, PeanoOps};
    pub use crate::automaton::evolution::{run_to_stable, Evolution, EvolutionState};
    pub use crate::automaton::rule::Rule;
    pub use crate::core::sequence::{decode, encode, CellSequence};
    pub use crate::core::symbol::Symbol;
    pub use crate::error::{Error, Result};
}
