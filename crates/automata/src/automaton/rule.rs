//! The three rule families of the marker automaton.
//!
//! Each rule is a pure function of a cell and its two neighbors. Neighbors
//! are `Option<Symbol>`; `None` means the cell sits on that boundary.
//!
//! # Successor
//!
//! ```text
//! cell  left   right        -> next
//! #     digit  (boundary)   -> _      marker consumed at the tail
//! #     any    _ or 0       -> 0
//! 1     any    #            -> #      carry moves left
//! 0     any    #            -> 1      increment lands
//! ```
//!
//! # Predecessor
//!
//! ```text
//! #     digit  (boundary)   -> _
//! #     any    _ or 1       -> 1
//! 0     any    #            -> #      borrow moves left
//! 1     any    #            -> 0      decrement lands
//! ```
//!
//! # Zero
//!
//! Digits become `0`; the marker and empty cells become `_`.
//!
//! Every combination not listed is left unchanged.

use core::fmt;

use crate::core::symbol::Symbol;

/// Rule family selector.
///
/// # Example
///
/// ```
/// use automata::{Rule, Symbol};
///
/// // The cell left of the marker absorbs the increment.
/// let next = Rule::Successor.apply(Symbol::Zero, Some(Symbol::One), Some(Symbol::Marker));
/// assert_eq!(next, Symbol::One);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Collapse to the zero encoding.
    Zero,
    /// Ripple-carry increment.
    Successor,
    /// Ripple-borrow decrement.
    Predecessor,
}

impl Rule {
    /// All rule families.
    pub const ALL: [Self; 3] = [Self::Zero, Self::Successor, Self::Predecessor];

    /// Lowercase name of the rule family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Successor => "successor",
            Self::Predecessor => "predecessor",
        }
    }

    /// Computes the next value of `cell` from the previous generation.
    #[inline]
    #[must_use]
    pub fn apply(self, cell: Symbol, left: Option<Symbol>, right: Option<Symbol>) -> Symbol {
        match self {
            Self::Zero => zero(cell),
            Self::Successor => ripple(cell, left, right, Symbol::Zero),
            Self::Predecessor => ripple(cell, left, right, Symbol::One),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn zero(cell: Symbol) -> Symbol {
    match cell {
        Symbol::Zero | Symbol::One => Symbol::Zero,
        Symbol::Marker | Symbol::Empty => Symbol::Empty,
    }
}

/// Shared shape of the successor and predecessor rules.
///
/// `settled` is the digit the marker leaves behind: `0` when incrementing,
/// `1` when decrementing. Its complement is the digit that propagates the
/// carry (or borrow) one cell to the left.
#[inline]
fn ripple(cell: Symbol, left: Option<Symbol>, right: Option<Symbol>, settled: Symbol) -> Symbol {
    let carry = if settled == Symbol::Zero {
        Symbol::One
    } else {
        Symbol::Zero
    };
    match (cell, right) {
        (Symbol::Marker, None) if left.is_some_and(Symbol::is_digit) => Symbol::Empty,
        (Symbol::Marker, Some(r)) if r == Symbol::Empty || r == settled => settled,
        (c, Some(Symbol::Marker)) if c == carry => Symbol::Marker,
        (c, Some(Symbol::Marker)) if c == settled => carry,
        (c, _) => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{Empty, Marker, One, Zero};

    #[test]
    fn zero_rule_collapses() {
        for left in [None, Some(One)] {
            assert_eq!(Rule::Zero.apply(One, left, Some(Zero)), Zero);
            assert_eq!(Rule::Zero.apply(Zero, left, None), Zero);
            assert_eq!(Rule::Zero.apply(Marker, left, None), Empty);
            assert_eq!(Rule::Zero.apply(Empty, left, Some(One)), Empty);
        }
    }

    #[test]
    fn successor_table() {
        let s = Rule::Successor;
        assert_eq!(s.apply(Marker, Some(One), None), Empty);
        assert_eq!(s.apply(Marker, Some(Zero), None), Empty);
        assert_eq!(s.apply(Marker, None, Some(Empty)), Zero);
        assert_eq!(s.apply(Marker, Some(One), Some(Zero)), Zero);
        assert_eq!(s.apply(One, None, Some(Marker)), Marker);
        assert_eq!(s.apply(Zero, Some(Zero), Some(Marker)), One);
        // unchanged combinations
        assert_eq!(s.apply(Marker, None, None), Marker);
        assert_eq!(s.apply(Marker, Some(Zero), Some(One)), Marker);
        assert_eq!(s.apply(One, Some(One), Some(Zero)), One);
        assert_eq!(s.apply(Zero, None, Some(Empty)), Zero);
        assert_eq!(s.apply(Empty, Some(Marker), None), Empty);
    }

    #[test]
    fn predecessor_table() {
        let p = Rule::Predecessor;
        assert_eq!(p.apply(Marker, Some(Zero), None), Empty);
        assert_eq!(p.apply(Marker, Some(One), Some(Empty)), One);
        assert_eq!(p.apply(Marker, None, Some(One)), One);
        assert_eq!(p.apply(Zero, None, Some(Marker)), Marker);
        assert_eq!(p.apply(One, Some(Zero), Some(Marker)), Zero);
        // unchanged combinations
        assert_eq!(p.apply(Marker, Some(One), Some(Zero)), Marker);
        assert_eq!(p.apply(Zero, Some(One), Some(One)), Zero);
        assert_eq!(p.apply(Empty, None, Some(Marker)), Empty);
    }

    #[test]
    fn names() {
        let names: Vec<_> = Rule::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, ["zero", "successor", "predecessor"]);
    }
}
