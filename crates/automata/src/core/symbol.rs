//! The four-symbol alphabet of the marker automaton.
//!
//! Digits `0` and `1` carry the encoded value, `#` is the travelling marker
//! that performs one carry (or borrow) step per generation, and
//! [`Symbol::Empty`] is a collapsed position. An empty cell is still a cell:
//! it occupies an index until the final decode drops it.

use core::fmt;

use crate::error::Malformed;

/// One cell value of the 1-D automaton.
///
/// # Example
///
/// ```
/// use automata::Symbol;
///
/// assert_eq!(Symbol::from_digit('1', 0), Ok(Symbol::One));
/// assert!(Symbol::from_digit('#', 3).is_err());
/// assert_eq!(Symbol::Empty.glyph(), '_');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Digit `0`.
    Zero,
    /// Digit `1`.
    One,
    /// The marker `#`.
    Marker,
    /// A collapsed (erased) position.
    Empty,
}

impl Symbol {
    /// Glyph used when displaying an empty cell.
    pub const EMPTY_GLYPH: char = '_';

    /// Parses a raw digit. Only `'0'` and `'1'` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed::UnsupportedSymbol`] for any other character,
    /// reporting `position`.
    #[inline]
    pub const fn from_digit(c: char, position: usize) -> Result<Self, Malformed> {
        match c {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            symbol => Err(Malformed::UnsupportedSymbol { symbol, position }),
        }
    }

    /// Parses a cell glyph as printed by [`Symbol::glyph`].
    #[inline]
    #[must_use]
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            '#' => Some(Self::Marker),
            Self::EMPTY_GLYPH => Some(Self::Empty),
            _ => None,
        }
    }

    /// Display character for this symbol.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Marker => '#',
            Self::Empty => Self::EMPTY_GLYPH,
        }
    }

    /// The digit character, or `None` for the marker and empty cells.
    #[inline]
    #[must_use]
    pub const fn digit(self) -> Option<char> {
        match self {
            Self::Zero => Some('0'),
            Self::One => Some('1'),
            Self::Marker | Self::Empty => None,
        }
    }

    /// True for `0` and `1`.
    #[inline]
    #[must_use]
    pub const fn is_digit(self) -> bool {
        matches!(self, Self::Zero | Self::One)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Symbol; 4] = [Symbol::Zero, Symbol::One, Symbol::Marker, Symbol::Empty];

    #[test]
    fn glyph_roundtrip() {
        for s in ALL {
            assert_eq!(Symbol::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(Symbol::from_glyph('x'), None);
    }

    #[test]
    fn from_digit_rejects_non_digits() {
        assert_eq!(
            Symbol::from_digit('2', 5),
            Err(Malformed::UnsupportedSymbol {
                symbol: '2',
                position: 5
            })
        );
        assert!(Symbol::from_digit('#', 0).is_err());
        assert!(Symbol::from_digit('_', 0).is_err());
    }

    #[test]
    fn only_digits_have_digit_chars() {
        assert_eq!(Symbol::Zero.digit(), Some('0'));
        assert_eq!(Symbol::One.digit(), Some('1'));
        assert_eq!(Symbol::Marker.digit(), None);
        assert_eq!(Symbol::Empty.digit(), None);
        assert!(Symbol::One.is_digit());
        assert!(!Symbol::Marker.is_digit());
    }
}
