//! Iterated runs: `Add`, `Prod`, and `Exp` against wrapping binary
//! arithmetic, plus the identities that define them.

use automata::arithmetic::{add, exp, pred, prod, s, z, Automaton, PeanoOps};

use super::{operands, same_width_pairs, value, with_width, Tally};
use crate::report::{CheckResult, ConformanceReport};

/// Widest operands enumerated here. `Exp` costs `y^x` successor runs, so
/// wider pairs are skipped with a warning.
pub const MAX_WIDTH: usize = 4;

/// Runs the arithmetic checks over operands up to `max_width` digits,
/// capped at [`MAX_WIDTH`].
pub fn validate(max_width: usize) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let width = max_width.min(MAX_WIDTH);

    report.push(is_zero(width).finish(
        "arithmetic/is-zero",
        "a value is zero exactly when Z leaves it unchanged",
    ));
    report.push(inverses(width).finish(
        "arithmetic/inverses",
        "Pred undoes S and S undoes Pred away from the wrap point",
    ));
    report.push(identities(width).finish(
        "arithmetic/identities",
        "Add has Z as identity, Prod absorbs Z, Exp of Z is one",
    ));
    report.push(binary(width).finish(
        "arithmetic/binary",
        "Add, Prod, and Exp agree with wrapping binary arithmetic",
    ));

    if max_width > MAX_WIDTH {
        report.push(CheckResult::warn(
            "arithmetic/width",
            format!("operands wider than {MAX_WIDTH} digits were not enumerated"),
        ));
    }
    report
}

fn is_zero(max_width: usize) -> Tally {
    let automaton = Automaton::default();
    let mut tally = Tally::new();
    for x in operands(max_width) {
        let expected = !x.contains('1');
        match automaton.is_zero(&x) {
            Ok(zero) => tally.require(zero == expected, format_args!("is_zero({x}) = {zero}")),
            Err(err) => tally.require(false, format_args!("is_zero({x}): {err}")),
        }
    }
    tally
}

fn inverses(max_width: usize) -> Tally {
    let mut tally = Tally::new();
    for x in operands(max_width) {
        if x.contains('0') {
            tally.expect(
                format_args!("Pred(S({x}))"),
                s(&x).and_then(|next| pred(&next)).map(|back| (back, x.clone())),
            );
        }
        if x.contains('1') {
            tally.expect(
                format_args!("S(Pred({x}))"),
                pred(&x).and_then(|prev| s(&prev)).map(|back| (back, x.clone())),
            );
        }
    }
    tally
}

fn identities(max_width: usize) -> Tally {
    let mut tally = Tally::new();
    for (x, y) in same_width_pairs(max_width) {
        tally.expect(
            format_args!("Add(Z({x}), {y})"),
            z(&x).and_then(|zero| add(&zero, &y)).map(|sum| (sum, y.clone())),
        );
        tally.expect(
            format_args!("Add({x}, Z({y}))"),
            z(&y).and_then(|zero| add(&x, &zero)).map(|sum| (sum, x.clone())),
        );
        tally.expect(
            format_args!("Prod(Z({x}), {y})"),
            z(&x).and_then(|zero| Ok((prod(&zero, &y)?, zero))),
        );
        tally.expect(
            format_args!("Exp(Z({x}), {y})"),
            z(&x).and_then(|zero| Ok((exp(&zero, &y)?, s(&zero)?))),
        );
    }
    tally
}

fn binary(max_width: usize) -> Tally {
    let mut tally = Tally::new();
    for (x, y) in same_width_pairs(max_width) {
        let width = x.len();
        let (vx, vy) = (value(&x), value(&y));

        let sum = with_width(vx + vy, width);
        tally.expect(format_args!("Add({x}, {y})"), add(&x, &y).map(|r| (r, sum)));

        let product = with_width(vx * vy, width);
        tally.expect(format_args!("Prod({x}, {y})"), prod(&x, &y).map(|r| (r, product)));

        let modulus = 1u64 << width;
        let power = (0..vx).fold(1 % modulus, |acc, _| acc * vy % modulus);
        let power = with_width(power, width);
        tally.expect(format_args!("Exp({x}, {y})"), exp(&x, &y).map(|r| (r, power)));
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_checks_pass_up_to_width_three() {
        let report = validate(3);
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "{failures:#?}");
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn inverses_skip_the_wrap_point() {
        // "1" only has S(Pred(1)); "0" only has Pred(S(0)).
        let result = inverses(1).finish("a", "p");
        assert_eq!(result.message, "p (2 cases)");
    }
}
