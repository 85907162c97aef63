//! Conformance report types: per-check outcomes and their aggregation.

use serde::Serialize;

/// Outcome level of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every case held.
    Pass,
    /// Non-blocking finding, e.g. a width that was skipped.
    Warning,
    /// At least one case violated the property.
    Failure,
}

impl Severity {
    /// Bracketed tag used by the command-line runner.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pass => "[PASS]",
            Self::Warning => "[WARN]",
            Self::Failure => "[FAIL]",
        }
    }
}

/// One check's outcome over all the cases it enumerated.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Identifier of the check, `area/property`.
    pub check: String,
    /// One-line summary.
    pub message: String,
    /// Outcome level.
    pub severity: Severity,
    /// Offending cases, one per line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CheckResult {
    /// A passing result.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(check, message, Severity::Pass, Vec::new())
    }

    /// A failing result listing the offending cases.
    pub fn fail_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::with(check, message, Severity::Failure, details)
    }

    /// A warning result.
    pub fn warn(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(check, message, Severity::Warning, Vec::new())
    }

    fn with(
        check: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// True for [`Severity::Failure`].
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// All check results from one suite run.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// Results in the order the checks ran.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == Severity::Warning)
            .count()
    }

    /// True when no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
