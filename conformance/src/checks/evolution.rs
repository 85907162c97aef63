//! Single-rule runs: convergence, increment and decrement, zero image, and
//! rejection of malformed input.

use automata::arithmetic::{pred, s, z};
use automata::{encode, run_to_stable, Error, Rule};

use super::{digit_strings, operands, value, with_width, Tally};
use crate::report::ConformanceReport;

/// Raw inputs that every entry point must reject before evolving.
const MALFORMED: &[&str] = &["", "2", "#", "0#", "01a", "1 0", "10\n", "0é"];

/// Runs the evolution checks over every operand up to `max_width` digits.
pub fn validate(max_width: usize) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(convergence(max_width).finish(
        "evolution/convergence",
        "every rule stabilizes within length + 1 generations, marker consumed",
    ));
    report.push(
        increment(max_width).finish("evolution/increment", "S is fixed-width binary increment"),
    );
    report.push(decrement(max_width).finish(
        "evolution/decrement",
        "Pred is binary decrement, fixed at zero",
    ));
    report.push(zero_image(max_width).finish(
        "evolution/zero",
        "Z clears every digit and is idempotent",
    ));
    report.push(malformed().finish(
        "evolution/malformed",
        "malformed input is rejected by every rule",
    ));
    report
}

fn convergence(max_width: usize) -> Tally {
    let mut tally = Tally::new();
    for x in operands(max_width) {
        for rule in Rule::ALL {
            let outcome = encode(&x).and_then(|seq| {
                let bound = seq.len() + 1;
                run_to_stable(seq, rule, None).map(|stable| (stable, bound))
            });
            match outcome {
                Ok((stable, bound)) => tally.require(
                    stable.generations <= bound
                        && stable.sequence.marker_count() == 0
                        && stable.decoded().len() == x.len(),
                    format_args!(
                        "{rule}({x}): {} after {} generations",
                        stable.sequence, stable.generations
                    ),
                ),
                Err(err) => tally.require(false, format_args!("{rule}({x}): {err}")),
            }
        }
    }
    tally
}

fn increment(max_width: usize) -> Tally {
    let mut tally = Tally::new();
    for width in 1..=max_width {
        for x in digit_strings(width) {
            let expected = with_width(value(&x) + 1, width);
            tally.expect(format_args!("S({x})"), s(&x).map(|next| (next, expected)));
        }
    }
    tally
}

fn decrement(max_width: usize) -> Tally {
    let mut tally = Tally::new();
    for width in 1..=max_width {
        for x in digit_strings(width) {
            let expected = match value(&x) {
                0 => x.clone(),
                v => with_width(v - 1, width),
            };
            tally.expect(format_args!("Pred({x})"), pred(&x).map(|prev| (prev, expected)));
        }
    }
    tally
}

fn zero_image(max_width: usize) -> Tally {
    let mut tally = Tally::new();
    for x in operands(max_width) {
        let zeros = "0".repeat(x.len());
        tally.expect(format_args!("Z({x})"), z(&x).map(|once| (once, zeros)));
        tally.expect(
            format_args!("Z(Z({x}))"),
            z(&x).and_then(|once| z(&once).map(|twice| (twice, once))),
        );
    }
    tally
}

fn malformed() -> Tally {
    let mut tally = Tally::new();
    for raw in MALFORMED {
        for (name, result) in [("Z", z(raw)), ("S", s(raw)), ("Pred", pred(raw))] {
            tally.require(
                matches!(result, Err(Error::MalformedInput(_))),
                format_args!("{name}({raw:?}) returned {result:?}"),
            );
        }
    }
    tally
}
