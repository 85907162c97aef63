//! Error types for sequence construction, evolution, and arithmetic.
//!
//! Every failure the core can produce is recoverable at the caller:
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`Error::MalformedInput`] | [`encode`](crate::encode), [`CellSequence::from_symbols`](crate::CellSequence::from_symbols), [`LifeGrid::parse`](crate::LifeGrid::parse) |
//! | [`Error::NonConvergence`] | [`run_to_stable`](crate::run_to_stable) |
//! | [`Error::RecursionDepthExceeded`] | the iterative `add` / `prod` / `exp` loops |

use thiserror::Error;

use crate::automaton::rule::Rule;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures surfaced by the automaton core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input rejected before any evolution took place.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] Malformed),

    /// The evolution loop hit its generation cap without reaching a steady state.
    #[error("{rule} rule did not stabilize within {generations} generations")]
    NonConvergence {
        /// Rule family that was being applied.
        rule: Rule,
        /// Generations computed before giving up.
        generations: usize,
    },

    /// An arithmetic loop needed more iterations than the configured bound.
    #[error("arithmetic operand exceeded the iteration limit of {limit}")]
    RecursionDepthExceeded {
        /// The configured iteration bound.
        limit: usize,
    },
}

/// The specific way an input was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// No digits at all.
    #[error("input is empty")]
    Empty,

    /// A character outside the accepted alphabet.
    #[error("unsupported symbol {symbol:?} at position {position}")]
    UnsupportedSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based character position.
        position: usize,
    },

    /// A sequence must carry exactly one marker.
    #[error("expected exactly one marker, found {found}")]
    MarkerCount {
        /// Number of markers present.
        found: usize,
    },

    /// The marker must be the last cell.
    #[error("marker at position {position} is not at the tail")]
    MarkerNotAtTail {
        /// Position of the marker.
        position: usize,
    },

    /// A collapsed cell appeared in a freshly built sequence.
    #[error("empty cell at position {position}")]
    EmptyCell {
        /// Position of the empty cell.
        position: usize,
    },

    /// Grid input had no rows.
    #[error("grid has no rows")]
    NoRows,

    /// A grid row does not match the grid side.
    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Expected cell count (number of rows).
        expected: usize,
        /// Actual cell count.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_converts_into_error() {
        let err: Error = Malformed::Empty.into();
        assert_eq!(err, Error::MalformedInput(Malformed::Empty));
        assert_eq!(err.to_string(), "malformed input: input is empty");
    }

    #[test]
    fn non_convergence_names_rule() {
        let err = Error::NonConvergence {
            rule: Rule::Successor,
            generations: 7,
        };
        assert_eq!(
            err.to_string(),
            "successor rule did not stabilize within 7 generations"
        );
    }
}
