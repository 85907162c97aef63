//! Cell sequences and boundary-aware neighbor lookup.
//!
//! A [`CellSequence`] is built either by [`encode`] (raw digits plus one
//! trailing marker) or by [`CellSequence::from_symbols`], both of which
//! enforce the marker invariant. Evolution produces later generations of the
//! same length; empty cells are only dropped by [`decode`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::symbol::Symbol;
use crate::error::{Malformed, Result};

/// The ordered symbol array one automaton run operates on.
///
/// # Example
///
/// ```
/// use automata::{decode, encode, Symbol};
///
/// let seq = encode("0011").unwrap();
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq.to_string(), "0011#");
/// assert_eq!(seq.right_neighbor(3), Some(Symbol::Marker));
/// assert_eq!(seq.right_neighbor(4), None);
/// assert_eq!(decode(&seq), "0011");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellSequence {
    cells: Vec<Symbol>,
}

impl CellSequence {
    /// Builds a sequence from caller-supplied symbols.
    ///
    /// The symbols must be at least one digit followed by exactly one
    /// marker at the tail, with no empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed`] describing the first violated constraint.
    pub fn from_symbols(cells: Vec<Symbol>) -> Result<Self> {
        let markers = cells.iter().filter(|&&s| s == Symbol::Marker).count();
        if markers != 1 {
            return Err(Malformed::MarkerCount { found: markers }.into());
        }
        let tail = cells.len() - 1;
        for (position, &cell) in cells.iter().enumerate() {
            match cell {
                Symbol::Marker if position != tail => {
                    return Err(Malformed::MarkerNotAtTail { position }.into());
                }
                Symbol::Empty => return Err(Malformed::EmptyCell { position }.into()),
                _ => {}
            }
        }
        if tail == 0 {
            return Err(Malformed::Empty.into());
        }
        Ok(Self { cells })
    }

    /// Wraps an already-evolved generation. Only the evolution loop calls this.
    #[inline]
    pub(crate) fn from_generation(cells: Vec<Symbol>) -> Self {
        Self { cells }
    }

    /// Number of cells, including the marker and any empty cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the sequence has no cells (never the case after construction).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells as a slice.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// The cell at `index`, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied()
    }

    /// The cell at `index - 1`, or `None` at the left boundary.
    #[inline]
    #[must_use]
    pub fn left_neighbor(&self, index: usize) -> Option<Symbol> {
        index.checked_sub(1).and_then(|i| self.get(i))
    }

    /// The cell at `index + 1`, or `None` at the right boundary.
    #[inline]
    #[must_use]
    pub fn right_neighbor(&self, index: usize) -> Option<Symbol> {
        index.checked_add(1).and_then(|i| self.get(i))
    }

    /// Number of marker cells currently present.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s == Symbol::Marker).count()
    }

    /// Consumes the sequence, returning its cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<Symbol> {
        self.cells
    }
}

impl fmt::Display for CellSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

/// Encodes a raw digit string: every character must be `0` or `1`, and one
/// marker is appended.
///
/// # Errors
///
/// [`Malformed::Empty`] for an empty string and
/// [`Malformed::UnsupportedSymbol`] for the first non-digit character.
pub fn encode(raw: &str) -> Result<CellSequence> {
    if raw.is_empty() {
        return Err(Malformed::Empty.into());
    }
    let mut cells = Vec::with_capacity(raw.len() + 1);
    for (position, c) in raw.chars().enumerate() {
        cells.push(Symbol::from_digit(c, position)?);
    }
    cells.push(Symbol::Marker);
    Ok(CellSequence { cells })
}

/// Decodes a sequence by dropping empty cells and joining the digits.
///
/// A marker that has not yet been consumed is dropped as well, so a
/// partially evolved sequence decodes to its digits only.
#[must_use]
pub fn decode(sequence: &CellSequence) -> String {
    sequence.cells.iter().filter_map(|s| s.digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn encode_appends_single_marker() {
        let seq = encode("0110").unwrap();
        assert_eq!(
            seq.cells(),
            &[
                Symbol::Zero,
                Symbol::One,
                Symbol::One,
                Symbol::Zero,
                Symbol::Marker
            ]
        );
        assert_eq!(seq.marker_count(), 1);
    }

    #[test]
    fn encode_rejects_stray_character() {
        assert_eq!(
            encode("01x1"),
            Err(Error::MalformedInput(Malformed::UnsupportedSymbol {
                symbol: 'x',
                position: 2
            }))
        );
        assert!(encode("01#").is_err());
        assert_eq!(encode(""), Err(Error::MalformedInput(Malformed::Empty)));
    }

    #[test]
    fn neighbors_respect_boundaries() {
        let seq = encode("01").unwrap();
        assert_eq!(seq.left_neighbor(0), None);
        assert_eq!(seq.left_neighbor(1), Some(Symbol::Zero));
        assert_eq!(seq.right_neighbor(1), Some(Symbol::Marker));
        assert_eq!(seq.right_neighbor(2), None);
        assert_eq!(seq.right_neighbor(usize::MAX), None);
        assert_eq!(seq.left_neighbor(99), None);
    }

    #[test]
    fn decode_drops_empty_and_marker() {
        let seq = CellSequence::from_generation(vec![
            Symbol::One,
            Symbol::Empty,
            Symbol::Zero,
            Symbol::Marker,
            Symbol::Empty,
        ]);
        assert_eq!(decode(&seq), "10");
    }

    #[test]
    fn from_symbols_enforces_marker_invariant() {
        use Symbol::*;
        assert!(CellSequence::from_symbols(vec![One, Marker]).is_ok());
        assert_eq!(
            CellSequence::from_symbols(vec![One, Zero]),
            Err(Error::MalformedInput(Malformed::MarkerCount { found: 0 }))
        );
        assert_eq!(
            CellSequence::from_symbols(vec![Marker, One, Marker]),
            Err(Error::MalformedInput(Malformed::MarkerCount { found: 2 }))
        );
        assert_eq!(
            CellSequence::from_symbols(vec![One, Marker, Zero]),
            Err(Error::MalformedInput(Malformed::MarkerNotAtTail {
                position: 1
            }))
        );
        assert_eq!(
            CellSequence::from_symbols(vec![Empty, One, Marker]),
            Err(Error::MalformedInput(Malformed::EmptyCell { position: 0 }))
        );
        assert_eq!(
            CellSequence::from_symbols(vec![Marker]),
            Err(Error::MalformedInput(Malformed::Empty))
        );
    }
}
