//! `automata-conformance`: Runs the exhaustive conformance suite.
//!
//! Checks single-rule evolution, the arithmetic built on it, and the life
//! grid for every input up to the given width.
//!
//! **Usage:**
//! ```text
//! automata-conformance [--max-width <n>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use automata_clients::init_logging;
use automata_conformance::{run_all, Severity, SuiteConfig};
use clap::{ArgAction, Parser};

/// Run the automata conformance suite.
#[derive(Parser)]
#[command(
    name = "automata-conformance",
    about = "Check the automata against binary arithmetic, exhaustively"
)]
struct Args {
    /// Largest operand width to enumerate.
    #[arg(long, default_value_t = SuiteConfig::default().max_width)]
    max_width: usize,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = run_all(&SuiteConfig {
        max_width: args.max_width,
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Automata Conformance Report");
        println!("===========================");
        println!();

        for result in &report.results {
            println!("{} {}: {}", result.severity.tag(), result.check, result.message);
            for detail in &result.details {
                println!("       {detail}");
            }
        }

        let passed = report
            .results
            .iter()
            .filter(|r| r.severity == Severity::Pass)
            .count();
        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            passed,
            report.warning_count(),
            report.failure_count()
        );
    }

    if !report.all_passed() {
        eprintln!(
            "Conformance FAILED: {} check(s) did not pass.",
            report.failure_count()
        );
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
