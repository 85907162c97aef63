//! A square 2-D life grid with a von Neumann neighborhood.
//!
//! Independent of the marker automaton and its arithmetic. Each cell looks at
//! the up to four orthogonal neighbors inside the grid (no wraparound):
//!
//! | Cell | Alive neighbors | Next |
//! |------|-----------------|------|
//! | alive | 0, 1, or 4 | dead |
//! | dead | 3 | alive |
//! | any | otherwise | unchanged |
//!
//! Like the 1-D automaton, each generation is computed from a snapshot of
//! the previous one.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Malformed, Result};

/// Token that ends the grid rows in raw input; anything after it is ignored.
pub const ROW_TERMINATOR: &str = "#";

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifeCell {
    /// `0`
    #[default]
    Dead,
    /// `1`
    Alive,
}

impl LifeCell {
    /// Display character.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Dead => '0',
            Self::Alive => '1',
        }
    }

    /// Next state given the number of alive neighbors.
    #[inline]
    #[must_use]
    pub const fn next(self, alive_neighbors: usize) -> Self {
        match (self, alive_neighbors) {
            (Self::Alive, 0 | 1 | 4) => Self::Dead,
            (Self::Dead, 3) => Self::Alive,
            (cell, _) => cell,
        }
    }
}

/// An `n × n` grid of [`LifeCell`]s, stored row-major.
///
/// # Example
///
/// ```
/// use automata::LifeGrid;
///
/// let grid = LifeGrid::parse("1011 1111 1111 1111 # 0000 0000").unwrap();
/// assert_eq!(grid.side(), 4);
/// assert_eq!(grid.evolve().to_string(), "0 1 1 1 \n1 1 0 1 \n1 0 0 1 \n1 1 1 1 \n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LifeGrid {
    side: usize,
    cells: Box<[LifeCell]>,
}

impl LifeGrid {
    /// Parses whitespace-separated rows of `0`/`1`, stopping at a standalone
    /// [`ROW_TERMINATOR`] token.
    ///
    /// # Errors
    ///
    /// [`Malformed::NoRows`] when there are no rows,
    /// [`Malformed::NotSquare`] when a row length differs from the row
    /// count, and [`Malformed::UnsupportedSymbol`] for any other character
    /// (its position is the row-major cell index).
    pub fn parse(raw: &str) -> Result<Self> {
        let rows: Vec<&str> = raw
            .split_whitespace()
            .take_while(|token| *token != ROW_TERMINATOR)
            .collect();
        if rows.is_empty() {
            return Err(Malformed::NoRows.into());
        }
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for (row, token) in rows.iter().enumerate() {
            let found = token.chars().count();
            if found != side {
                return Err(Malformed::NotSquare {
                    row,
                    expected: side,
                    found,
                }
                .into());
            }
            for (col, c) in token.chars().enumerate() {
                let cell = match c {
                    '0' => LifeCell::Dead,
                    '1' => LifeCell::Alive,
                    symbol => {
                        return Err(Malformed::UnsupportedSymbol {
                            symbol,
                            position: row * side + col,
                        }
                        .into())
                    }
                };
                cells.push(cell);
            }
        }
        Ok(Self {
            side,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell.
    #[must_use]
    pub fn from_fn<F>(side: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> LifeCell,
    {
        let cells = (0..side * side).map(|i| f(i / side, i % side)).collect();
        Self { side, cells }
    }

    /// Number of rows (and columns).
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<LifeCell> {
        if row < self.side && col < self.side {
            Some(self.cells[row * self.side + col])
        } else {
            None
        }
    }

    /// Sets the cell at `(row, col)`; out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: LifeCell) {
        if row < self.side && col < self.side {
            self.cells[row * self.side + col] = cell;
        }
    }

    /// All cells, row-major.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[LifeCell] {
        &self.cells
    }

    /// Number of alive cells.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == LifeCell::Alive).count()
    }

    /// The in-grid orthogonal neighbors of `(row, col)`, in the order
    /// left, up, right, down.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = LifeCell> + '_ {
        let left = col.checked_sub(1).map(|c| (row, c));
        let up = row.checked_sub(1).map(|r| (r, col));
        let right = col.checked_add(1).map(|c| (row, c));
        let down = row.checked_add(1).map(|r| (r, col));
        [left, up, right, down]
            .into_iter()
            .flatten()
            .filter_map(move |(r, c)| self.get(r, c))
    }

    /// Number of alive orthogonal neighbors of `(row, col)`.
    #[must_use]
    pub fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        self.neighbors(row, col)
            .filter(|&c| c == LifeCell::Alive)
            .count()
    }

    /// Computes the next generation.
    #[must_use]
    pub fn evolve(&self) -> Self {
        Self::from_fn(self.side, |row, col| {
            self.cells[row * self.side + col].next(self.alive_neighbors(row, col))
        })
    }

    /// Applies exactly `generations` generations.
    #[must_use]
    pub fn run(&self, generations: usize) -> Self {
        self.generations().take(generations).last().unwrap_or_else(|| self.clone())
    }

    /// Endless iterator over the following generations; pair with `take`.
    #[must_use]
    pub fn generations(&self) -> LifeGenerations {
        LifeGenerations {
            current: self.clone(),
        }
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side.max(1)) {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator returned by [`LifeGrid::generations`].
#[derive(Debug, Clone)]
pub struct LifeGenerations {
    current: LifeGrid,
}

impl Iterator for LifeGenerations {
    type Item = LifeGrid;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current.evolve();
        Some(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn rows(grid: &LifeGrid) -> Vec<String> {
        grid.cells()
            .chunks(grid.side())
            .map(|r| r.iter().map(|c| c.glyph()).collect())
            .collect()
    }

    #[test]
    fn four_generations_of_sample_input() {
        let grid = LifeGrid::parse("1011 1111 1111 1111 # 0000 0000 0000 0000").unwrap();
        let seen: Vec<_> = grid.generations().take(4).map(|g| rows(&g)).collect();
        assert_eq!(seen[0], ["0111", "1101", "1001", "1111"]);
        assert_eq!(seen[1], ["0111", "1111", "1101", "1111"]);
        assert_eq!(seen[2], ["0111", "1011", "1101", "1111"]);
        assert_eq!(seen[3], ["0011", "0011", "1101", "1111"]);
        assert_eq!(rows(&grid.run(4)), seen[3]);
    }

    #[test]
    fn crowded_center_and_lonely_arms_die() {
        let grid = LifeGrid::parse("010 111 010").unwrap();
        assert_eq!(grid.evolve().alive_count(), 0);
    }

    #[test]
    fn run_zero_generations_is_identity() {
        let grid = LifeGrid::parse("10 01").unwrap();
        assert_eq!(grid.run(0), grid);
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = LifeGrid::from_fn(3, |_, _| LifeCell::Alive);
        assert_eq!(grid.neighbors(0, 0).count(), 2);
        assert_eq!(grid.neighbors(1, 1).count(), 4);
        assert_eq!(grid.neighbors(2, 1).count(), 3);
        assert_eq!(grid.alive_neighbors(2, 2), 2);
    }

    #[test]
    fn rule_table() {
        assert_eq!(LifeCell::Alive.next(0), LifeCell::Dead);
        assert_eq!(LifeCell::Alive.next(1), LifeCell::Dead);
        assert_eq!(LifeCell::Alive.next(2), LifeCell::Alive);
        assert_eq!(LifeCell::Alive.next(3), LifeCell::Alive);
        assert_eq!(LifeCell::Alive.next(4), LifeCell::Dead);
        assert_eq!(LifeCell::Dead.next(3), LifeCell::Alive);
        assert_eq!(LifeCell::Dead.next(2), LifeCell::Dead);
    }

    #[test]
    fn malformed_grids_are_rejected() {
        assert_eq!(
            LifeGrid::parse("  # 0101"),
            Err(Error::MalformedInput(Malformed::NoRows))
        );
        assert_eq!(
            LifeGrid::parse("101 11 101"),
            Err(Error::MalformedInput(Malformed::NotSquare {
                row: 1,
                expected: 3,
                found: 2
            }))
        );
        assert_eq!(
            LifeGrid::parse("10 1x"),
            Err(Error::MalformedInput(Malformed::UnsupportedSymbol {
                symbol: 'x',
                position: 3
            }))
        );
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut grid = LifeGrid::from_fn(2, |_, _| LifeCell::Dead);
        grid.set(1, 0, LifeCell::Alive);
        grid.set(5, 5, LifeCell::Alive);
        assert_eq!(grid.alive_count(), 1);
        assert_eq!(grid.get(1, 0), Some(LifeCell::Alive));
        assert_eq!(grid.get(2, 0), None);
    }
}
