//! Exhaustive property checks, grouped by area.

pub mod arithmetic;
pub mod evolution;
pub mod life;

use std::fmt;

use crate::report::CheckResult;

/// Offending cases listed per failed check; the rest are counted.
const DETAIL_LIMIT: usize = 8;

/// Every digit string of exactly `width` digits, in increasing value.
pub(crate) fn digit_strings(width: usize) -> impl Iterator<Item = String> {
    (0..1u64 << width).map(move |v| format!("{v:0width$b}"))
}

/// Every digit string of width `1..=max_width`.
pub(crate) fn operands(max_width: usize) -> impl Iterator<Item = String> {
    (1..=max_width).flat_map(digit_strings)
}

/// Every ordered pair of equal-width digit strings up to `max_width`.
pub(crate) fn same_width_pairs(max_width: usize) -> impl Iterator<Item = (String, String)> {
    (1..=max_width).flat_map(|w| {
        digit_strings(w).flat_map(move |x| digit_strings(w).map(move |y| (x.clone(), y)))
    })
}

/// Numeric value of a digit string.
pub(crate) fn value(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0, |acc, b| (acc << 1) | u64::from(b == b'1'))
}

/// `value` reduced modulo `2^width`, written with exactly `width` digits.
pub(crate) fn with_width(value: u64, width: usize) -> String {
    let v = value & ((1u64 << width) - 1);
    format!("{v:0width$b}")
}

/// Case counter and violation log for one check.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    cases: usize,
    violations: Vec<String>,
}

impl Tally {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a case that must satisfy `holds`.
    pub(crate) fn require(&mut self, holds: bool, case: impl fmt::Display) {
        self.cases += 1;
        if !holds {
            self.violations.push(case.to_string());
        }
    }

    /// Records a case whose `(actual, expected)` pair must match.
    pub(crate) fn expect(
        &mut self,
        case: impl fmt::Display,
        outcome: automata::Result<(String, String)>,
    ) {
        self.cases += 1;
        match outcome {
            Ok((actual, expected)) if actual == expected => {}
            Ok((actual, expected)) => self
                .violations
                .push(format!("{case}: got {actual}, expected {expected}")),
            Err(err) => self.violations.push(format!("{case}: {err}")),
        }
    }

    /// Turns the tally into a single result.
    pub(crate) fn finish(self, check: &str, property: &str) -> CheckResult {
        if self.violations.is_empty() {
            return CheckResult::pass(check, format!("{property} ({} cases)", self.cases));
        }
        tracing::warn!(check, violations = self.violations.len(), "check failed");
        let total = self.violations.len();
        let mut details: Vec<String> = self.violations.into_iter().take(DETAIL_LIMIT).collect();
        if total > DETAIL_LIMIT {
            details.push(format!("... and {} more", total - DETAIL_LIMIT));
        }
        CheckResult::fail_with_details(
            check,
            format!("{property}: {total} of {} cases violated", self.cases),
            details,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_covers_every_width() {
        assert_eq!(operands(3).count(), 2 + 4 + 8);
        assert_eq!(same_width_pairs(2).count(), 4 + 16);
        assert_eq!(
            digit_strings(2).collect::<Vec<_>>(),
            ["00", "01", "10", "11"]
        );
    }

    #[test]
    fn width_reduction_wraps() {
        assert_eq!(value("0110"), 6);
        assert_eq!(with_width(9, 3), "001");
        assert_eq!(with_width(0, 2), "00");
    }

    #[test]
    fn details_are_truncated() {
        let mut tally = Tally::new();
        for i in 0..10 {
            tally.require(false, i);
        }
        let result = tally.finish("x/y", "never");
        assert!(result.is_failure());
        assert_eq!(result.details.len(), DETAIL_LIMIT + 1);
        assert_eq!(result.details[DETAIL_LIMIT], "... and 2 more");
        assert_eq!(result.message, "never: 10 of 10 cases violated");
    }
}
