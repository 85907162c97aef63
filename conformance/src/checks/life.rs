//! Life grid: the all-dead fixed point, a reference trajectory, and the rule
//! table on every small grid.

use automata::{LifeCell, LifeGrid};

use super::Tally;
use crate::report::ConformanceReport;

/// Largest side enumerated for the rule table (`2^(side^2)` grids).
const MAX_TABLE_SIDE: usize = 3;

const SAMPLE: &str = "1011 1111 1111 1111 # 0000 0000 0000 0000";

const SAMPLE_TRAJECTORY: [[&str; 4]; 4] = [
    ["0111", "1101", "1001", "1111"],
    ["0111", "1111", "1101", "1111"],
    ["0111", "1011", "1101", "1111"],
    ["0011", "0011", "1101", "1111"],
];

/// Runs the life checks; all-dead grids are tried up to `2 * max_width`
/// cells on a side.
pub fn validate(max_width: usize) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(dead_fixed_point(max_width * 2).finish(
        "life/dead-fixed-point",
        "an all-dead grid never changes",
    ));
    report.push(sample_trajectory().finish(
        "life/sample",
        "the 4x4 reference grid follows its known trajectory",
    ));
    report.push(rule_table(max_width.min(MAX_TABLE_SIDE)).finish(
        "life/rule-table",
        "every cell of every small grid follows the von Neumann rule",
    ));
    report
}

fn dead_fixed_point(max_side: usize) -> Tally {
    let mut tally = Tally::new();
    for side in 1..=max_side {
        let dead = LifeGrid::from_fn(side, |_, _| LifeCell::Dead);
        let later = dead.run(side + 1);
        tally.require(
            later == dead,
            format_args!("{side}x{side} grid came alive:\n{later}"),
        );
    }
    tally
}

fn rows(grid: &LifeGrid) -> Vec<String> {
    grid.cells()
        .chunks(grid.side().max(1))
        .map(|row| row.iter().map(|c| c.glyph()).collect())
        .collect()
}

fn sample_trajectory() -> Tally {
    let mut tally = Tally::new();
    match LifeGrid::parse(SAMPLE) {
        Ok(grid) => {
            for (n, (seen, expected)) in grid.generations().zip(SAMPLE_TRAJECTORY).enumerate() {
                let seen = rows(&seen);
                tally.require(
                    seen == expected,
                    format_args!("generation {}: {seen:?}, expected {expected:?}", n + 1),
                );
            }
        }
        Err(err) => tally.require(false, format_args!("parse: {err}")),
    }
    tally
}

/// Cell `(row, col)` of the grid whose row-major cells are the bits of `bits`.
fn bit(bits: u32, side: usize, row: isize, col: isize) -> bool {
    let n = side as isize;
    (0..n).contains(&row) && (0..n).contains(&col) && (bits >> (row * n + col)) & 1 == 1
}

fn rule_table(max_side: usize) -> Tally {
    let mut tally = Tally::new();
    for side in 1..=max_side {
        for bits in 0u32..1 << (side * side) {
            let grid = LifeGrid::from_fn(side, |r, c| {
                if bit(bits, side, r as isize, c as isize) {
                    LifeCell::Alive
                } else {
                    LifeCell::Dead
                }
            });
            let next = grid.evolve();
            for row in 0..side as isize {
                for col in 0..side as isize {
                    let alive = bit(bits, side, row, col);
                    let around = [(0, -1), (-1, 0), (0, 1), (1, 0)]
                        .into_iter()
                        .filter(|(dr, dc)| bit(bits, side, row + dr, col + dc))
                        .count();
                    let expected = match (alive, around) {
                        (true, 0 | 1 | 4) => false,
                        (false, 3) => true,
                        (state, _) => state,
                    };
                    let got = next.get(row as usize, col as usize) == Some(LifeCell::Alive);
                    tally.require(
                        got == expected,
                        format_args!("{side}x{side} grid {bits:#b}, cell ({row}, {col})"),
                    );
                }
            }
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_checks_pass() {
        let report = validate(4);
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "{failures:#?}");
    }

    #[test]
    fn rule_table_visits_every_cell_of_every_grid() {
        // side 1: 2 grids x 1 cell, side 2: 16 grids x 4 cells
        let result = rule_table(2).finish("l", "p");
        assert_eq!(result.message, "p (66 cases)");
    }
}
