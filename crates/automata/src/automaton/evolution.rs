//! The evolution loop: synchronous generations until a steady state.
//!
//! Every generation is computed from a frozen snapshot of the previous one.
//! Updating in place would let a carry travel several cells in a single
//! generation, which changes what the rules compute.
//!
//! ```text
//!          next != current
//!        ┌─────────────────┐
//!        ▼                 │
//!   ┌──────────┐   ────────┘        ┌────────┐
//!   │ Evolving │ ─────────────────▶ │ Stable │
//!   └──────────┘  next == current   └────────┘
//! ```

use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use super::rule::Rule;
use crate::core::sequence::{decode, CellSequence};
use crate::error::{Error, Result};

/// Where an [`Evolution`] currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    /// The last generation differed from its predecessor.
    Evolving,
    /// The last generation was identical to its predecessor. Terminal.
    Stable,
}

/// Computes the next generation of `sequence` under `rule`.
///
/// Pure: `sequence` is only read.
///
/// # Example
///
/// ```
/// use automata::{encode, evolve_one_generation, Rule};
///
/// let seq = encode("0011").unwrap();
/// let next = evolve_one_generation(&seq, Rule::Successor);
/// assert_eq!(next.to_string(), "001#_");
/// ```
#[must_use]
pub fn evolve_one_generation(sequence: &CellSequence, rule: Rule) -> CellSequence {
    let next: Vec<_> = sequence
        .cells()
        .iter()
        .enumerate()
        .map(|(i, &cell)| {
            rule.apply(cell, sequence.left_neighbor(i), sequence.right_neighbor(i))
        })
        .collect();
    CellSequence::from_generation(next)
}

/// Generation cap used when the caller does not supply one.
///
/// Every sequence produced by [`encode`](crate::encode) stabilizes within
/// `len + 1` generations; twice the length leaves headroom.
#[inline]
#[must_use]
pub const fn default_generation_cap(len: usize) -> usize {
    len.saturating_mul(2)
}

/// Iterator over successive generations of one automaton run.
///
/// Yields every generation that differs from its predecessor. The identical
/// generation that confirms the steady state is counted in
/// [`generation`](Self::generation) but not yielded.
///
/// # Example
///
/// ```
/// use automata::{encode, Evolution, EvolutionState, Rule};
///
/// let mut evo = Evolution::new(encode("01").unwrap(), Rule::Successor);
/// let shown: Vec<String> = evo.by_ref().map(|g| g.to_string()).collect();
/// assert_eq!(shown, ["0#_", "10_"]);
/// assert_eq!(evo.state(), EvolutionState::Stable);
/// assert_eq!(evo.generation(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Evolution {
    current: CellSequence,
    rule: Rule,
    generation: usize,
    state: EvolutionState,
}

impl Evolution {
    /// Starts a run of `rule` from `initial`.
    #[must_use]
    pub fn new(initial: CellSequence, rule: Rule) -> Self {
        Self {
            current: initial,
            rule,
            generation: 0,
            state: EvolutionState::Evolving,
        }
    }

    /// Current state of the run.
    #[inline]
    #[must_use]
    pub fn state(&self) -> EvolutionState {
        self.state
    }

    /// Number of generations computed so far.
    #[inline]
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The rule family being applied.
    #[inline]
    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The latest generation.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &CellSequence {
        &self.current
    }

    /// Consumes the run, returning the latest generation.
    #[must_use]
    pub fn into_current(self) -> CellSequence {
        self.current
    }
}

impl Iterator for Evolution {
    type Item = CellSequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == EvolutionState::Stable {
            return None;
        }
        let next = evolve_one_generation(&self.current, self.rule);
        self.generation += 1;
        if next == self.current {
            self.state = EvolutionState::Stable;
            debug!(
                rule = %self.rule,
                generations = self.generation,
                sequence = %self.current,
                "stable"
            );
            return None;
        }
        trace!(rule = %self.rule, generation = self.generation, sequence = %next, "evolved");
        self.current = next.clone();
        Some(next)
    }
}

/// The steady state reached by [`run_to_stable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stable {
    /// The final generation.
    pub sequence: CellSequence,
    /// Generations computed, including the one that confirmed stability.
    pub generations: usize,
}

impl Stable {
    /// The final generation decoded to its digits.
    #[must_use]
    pub fn decoded(&self) -> alloc::string::String {
        decode(&self.sequence)
    }
}

/// Evolves `initial` under `rule` until no cell changes.
///
/// `max_generations` bounds the run; `None` uses
/// [`default_generation_cap`] of the sequence length.
///
/// # Errors
///
/// Returns [`Error::NonConvergence`] if the cap is reached first.
///
/// # Example
///
/// ```
/// use automata::{encode, run_to_stable, Rule};
///
/// let stable = run_to_stable(encode("0011").unwrap(), Rule::Successor, None).unwrap();
/// assert_eq!(stable.decoded(), "0100");
/// assert_eq!(stable.generations, 4);
/// ```
pub fn run_to_stable(
    initial: CellSequence,
    rule: Rule,
    max_generations: Option<usize>,
) -> Result<Stable> {
    let cap = max_generations.unwrap_or_else(|| default_generation_cap(initial.len()));
    let mut evolution = Evolution::new(initial, rule);
    while evolution.generation() < cap {
        if evolution.next().is_none() {
            let generations = evolution.generation();
            return Ok(Stable {
                sequence: evolution.into_current(),
                generations,
            });
        }
    }
    warn!(rule = %rule, cap, sequence = %evolution.current(), "generation cap reached");
    Err(Error::NonConvergence {
        rule,
        generations: cap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::encode;
    use crate::core::symbol::Symbol;

    fn trace_of(raw: &str, rule: Rule) -> Vec<String> {
        Evolution::new(encode(raw).unwrap(), rule)
            .map(|g| g.to_string())
            .collect()
    }

    #[test]
    fn successor_ripples_one_cell_per_generation() {
        assert_eq!(
            trace_of("0011", Rule::Successor),
            ["001#_", "00#0_", "0100_"]
        );
    }

    #[test]
    fn successor_wraps_all_ones() {
        assert_eq!(
            trace_of("111", Rule::Successor),
            ["11#_", "1#0_", "#00_", "000_"]
        );
    }

    #[test]
    fn predecessor_borrows() {
        assert_eq!(
            trace_of("0100", Rule::Predecessor),
            ["010#_", "01#1_", "0011_"]
        );
    }

    #[test]
    fn zero_collapses_in_one_generation() {
        assert_eq!(trace_of("1011", Rule::Zero), ["0000_"]);
    }

    #[test]
    fn generation_preserves_length() {
        let seq = encode("10110").unwrap();
        for rule in Rule::ALL {
            assert_eq!(evolve_one_generation(&seq, rule).len(), seq.len());
        }
    }

    #[test]
    fn stable_runs_leave_no_marker() {
        for raw in ["0", "1", "0110", "1111", "100000"] {
            for rule in Rule::ALL {
                let len = raw.len() + 1;
                let stable = run_to_stable(encode(raw).unwrap(), rule, None).unwrap();
                assert_eq!(stable.sequence.marker_count(), 0, "{rule} on {raw}");
                assert!(stable.generations <= len + 1, "{rule} on {raw}");
            }
        }
    }

    #[test]
    fn cap_surfaces_non_convergence() {
        let err = run_to_stable(encode("0111").unwrap(), Rule::Successor, Some(2)).unwrap_err();
        assert_eq!(
            err,
            Error::NonConvergence {
                rule: Rule::Successor,
                generations: 2
            }
        );
    }

    #[test]
    fn exact_cap_is_enough() {
        // "01#" needs two changing generations and one confirming generation.
        let stable = run_to_stable(encode("01").unwrap(), Rule::Successor, Some(3)).unwrap();
        assert_eq!(stable.decoded(), "10");
        assert!(run_to_stable(encode("01").unwrap(), Rule::Successor, Some(2)).is_err());
    }

    #[test]
    fn input_sequence_is_not_mutated() {
        let seq = encode("011").unwrap();
        let before = seq.clone();
        let _ = evolve_one_generation(&seq, Rule::Successor);
        assert_eq!(seq, before);
        assert_eq!(seq.get(3), Some(Symbol::Marker));
    }
}
