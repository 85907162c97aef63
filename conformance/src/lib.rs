//! Conformance suite for the `automata` crate.
//!
//! Every check enumerates its inputs exhaustively up to a configured width
//! and compares the automaton against plain binary arithmetic, or against
//! a property that must hold for every input.
//!
//! # Conformance Scope
//!
//! | Area | Checks |
//! |------|--------|
//! | Evolution | convergence bound, increment/decrement, zero image, malformed rejection |
//! | Arithmetic | identities, inverses, agreement with wrapping binary arithmetic |
//! | Life | all-dead fixed point, reference trajectory, rule table on every small grid |
//!
//! # Entry Point
//!
//! ```
//! use automata_conformance::{run_all, SuiteConfig};
//!
//! let report = run_all(&SuiteConfig { max_width: 2 }).unwrap();
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod checks;
pub mod report;

pub use report::{CheckResult, ConformanceReport, Severity};

/// Widest digit string the suite will enumerate.
pub const MAX_SUPPORTED_WIDTH: usize = 16;

/// Settings for one suite run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Largest operand width to enumerate; every width from 1 up is covered.
    pub max_width: usize,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self { max_width: 4 }
    }
}

/// Runs every check and returns the aggregated report.
///
/// Checks run in this order:
/// 1. Evolution (single-rule runs)
/// 2. Arithmetic (iterated runs)
/// 3. Life grid
///
/// # Errors
///
/// Returns an error when `max_width` is zero or above
/// [`MAX_SUPPORTED_WIDTH`]. Property violations are reported as failures,
/// never as errors.
pub fn run_all(config: &SuiteConfig) -> anyhow::Result<ConformanceReport> {
    if config.max_width == 0 || config.max_width > MAX_SUPPORTED_WIDTH {
        anyhow::bail!(
            "max width must be between 1 and {MAX_SUPPORTED_WIDTH}, got {}",
            config.max_width
        );
    }

    let mut report = ConformanceReport::new();

    tracing::info!(max_width = config.max_width, "running evolution checks");
    report.extend(checks::evolution::validate(config.max_width));

    tracing::info!(max_width = config.max_width, "running arithmetic checks");
    report.extend(checks::arithmetic::validate(config.max_width));

    tracing::info!(max_width = config.max_width, "running life checks");
    report.extend(checks::life::validate(config.max_width));

    Ok(report)
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    fn failures(report: &ConformanceReport) -> Vec<&CheckResult> {
        report.results.iter().filter(|r| r.is_failure()).collect()
    }

    #[test]
    fn default_suite_passes() {
        let report = run_all(&SuiteConfig::default()).unwrap();
        assert!(
            report.all_passed(),
            "conformance failures: {:#?}",
            failures(&report)
        );
        assert!(!report.results.is_empty());
    }

    #[test]
    fn out_of_range_width_is_an_error() {
        assert!(run_all(&SuiteConfig { max_width: 0 }).is_err());
        assert!(run_all(&SuiteConfig {
            max_width: MAX_SUPPORTED_WIDTH + 1
        })
        .is_err());
    }

    #[test]
    fn wide_runs_warn_about_skipped_arithmetic() {
        let report = checks::arithmetic::validate(checks::arithmetic::MAX_WIDTH + 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.all_passed(), "{:#?}", failures(&report));
    }

    #[test]
    fn report_serializes_with_lowercase_severity() {
        let mut report = ConformanceReport::new();
        report.push(CheckResult::pass("life/sample", "ok"));
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"results":[{"check":"life/sample","message":"ok","severity":"pass"}]}"#
        );
    }
}
