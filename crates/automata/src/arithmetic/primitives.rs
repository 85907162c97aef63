//! The three automaton runs every arithmetic operation is built from.
//!
//! ```text
//! zero(x)       = decode(run_to_stable(encode(x), Zero))
//! succ(x)       = decode(run_to_stable(encode(x), Successor))
//! pred_step(x)  = decode(run_to_stable(encode(x), Predecessor))
//! ```
//!
//! `pred_step` is the unguarded predecessor run: on a zero encoding it
//! wraps to all ones. The guarded `pred` lives in
//! [`PeanoOps`](super::ops::PeanoOps).

use alloc::string::String;

use crate::automaton::evolution::run_to_stable;
use crate::automaton::rule::Rule;
use crate::config::{ArithmeticConfig, EvolutionConfig};
use crate::core::sequence::encode;
use crate::error::Result;

/// Automaton-backed primitives.
///
/// Backends decide how a run is bounded; the derived operations only ever
/// see digit strings.
///
/// # Example Implementation
///
/// ```
/// use automata::arithmetic::AutomatonPrimitives;
/// use automata::{encode, run_to_stable, Result, Rule};
///
/// struct Unbounded;
///
/// impl AutomatonPrimitives for Unbounded {
///     fn run(&self, x: &str, rule: Rule) -> Result<String> {
///         Ok(run_to_stable(encode(x)?, rule, None)?.decoded())
///     }
///     fn iteration_limit(&self) -> usize { usize::MAX }
/// }
///
/// assert_eq!(Unbounded.succ("011").unwrap(), "100");
/// ```
pub trait AutomatonPrimitives {
    /// Encodes `x`, evolves it under `rule` to a steady state, and decodes.
    ///
    /// # Errors
    ///
    /// `MalformedInput` for a bad digit string, `NonConvergence` if the run
    /// is cut off.
    fn run(&self, x: &str, rule: Rule) -> Result<String>;

    /// Bound on the remaining-operand counter of each derived loop.
    fn iteration_limit(&self) -> usize;

    /// `Z(x)`: the zero encoding of the same width.
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    #[inline]
    fn zero(&self, x: &str) -> Result<String> {
        self.run(x, Rule::Zero)
    }

    /// `S(x)`: ripple-carry successor.
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    #[inline]
    fn succ(&self, x: &str) -> Result<String> {
        self.run(x, Rule::Successor)
    }

    /// The predecessor run without the zero guard.
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    #[inline]
    fn pred_step(&self, x: &str) -> Result<String> {
        self.run(x, Rule::Predecessor)
    }
}

/// The reference backend: every primitive is a fresh [`run_to_stable`].
///
/// # Example
///
/// ```
/// use automata::arithmetic::{Automaton, PeanoOps};
///
/// let automaton = Automaton::default();
/// assert_eq!(automaton.add("011", "0010").unwrap(), "0101");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Automaton {
    evolution: EvolutionConfig,
    arithmetic: ArithmeticConfig,
}

impl Automaton {
    /// Creates a backend with explicit settings.
    #[must_use]
    pub const fn new(evolution: EvolutionConfig, arithmetic: ArithmeticConfig) -> Self {
        Self {
            evolution,
            arithmetic,
        }
    }

    /// The evolution settings in use.
    #[must_use]
    pub const fn evolution(&self) -> EvolutionConfig {
        self.evolution
    }

    /// The arithmetic settings in use.
    #[must_use]
    pub const fn arithmetic(&self) -> ArithmeticConfig {
        self.arithmetic
    }
}

impl From<&crate::config::AutomataConfig> for Automaton {
    fn from(config: &crate::config::AutomataConfig) -> Self {
        Self::new(config.evolution, config.arithmetic)
    }
}

impl AutomatonPrimitives for Automaton {
    fn run(&self, x: &str, rule: Rule) -> Result<String> {
        let stable = run_to_stable(encode(x)?, rule, self.evolution.max_generations)?;
        Ok(stable.decoded())
    }

    #[inline]
    fn iteration_limit(&self) -> usize {
        self.arithmetic.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Malformed};

    #[test]
    fn primitives_match_rule_runs() {
        let a = Automaton::default();
        assert_eq!(a.zero("0011").unwrap(), "0000");
        assert_eq!(a.succ("0011").unwrap(), "0100");
        assert_eq!(a.pred_step("0100").unwrap(), "0011");
    }

    #[test]
    fn unguarded_predecessor_wraps() {
        let a = Automaton::default();
        assert_eq!(a.pred_step("000").unwrap(), "111");
    }

    #[test]
    fn malformed_operand_never_evolves() {
        let a = Automaton::default();
        assert_eq!(
            a.succ("01a"),
            Err(Error::MalformedInput(Malformed::UnsupportedSymbol {
                symbol: 'a',
                position: 2
            }))
        );
    }

    #[test]
    fn generation_cap_is_forwarded() {
        let a = Automaton::new(
            EvolutionConfig {
                max_generations: Some(1),
            },
            ArithmeticConfig::default(),
        );
        assert!(matches!(
            a.succ("0111"),
            Err(Error::NonConvergence {
                rule: Rule::Successor,
                ..
            })
        ));
    }
}
