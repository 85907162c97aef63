//! `automata-arith`: Evaluates one arithmetic operation on the marker automaton.
//!
//! **Usage:**
//! ```text
//! automata-arith <zero|succ|pred|add|prod|exp> <x> [<y>] [--trace] [--json]
//! ```
//!
//! `--trace` prints every generation of the single-run operations.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Result};
use automata::arithmetic::{Automaton, AutomatonPrimitives, PeanoOps};
use automata::{encode, Evolution, Rule};
use automata_clients::{init_logging, load_config, pause};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;

/// Evaluate Z, S, Pred, Add, Prod, or Exp on fixed-width binary strings.
#[derive(Parser)]
#[command(
    name = "automata-arith",
    about = "Fixed-width arithmetic computed by marker automata"
)]
struct Args {
    /// Operation to evaluate.
    op: Op,

    /// First operand: a string of 0 and 1, most significant digit first.
    x: String,

    /// Second operand, for add, prod, and exp.
    y: Option<String>,

    /// Print every generation (zero, succ, and pred only).
    #[arg(long)]
    trace: bool,

    /// Pause between traced generations, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Generation cap per automaton run.
    #[arg(long)]
    max_generations: Option<usize>,

    /// Iteration bound for each add/prod/exp loop.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Op {
    Zero,
    Succ,
    Pred,
    Add,
    Prod,
    Exp,
}

impl Op {
    /// The rule behind a single-run operation.
    fn rule(self) -> Option<Rule> {
        match self {
            Self::Zero => Some(Rule::Zero),
            Self::Succ => Some(Rule::Successor),
            Self::Pred => Some(Rule::Predecessor),
            Self::Add | Self::Prod | Self::Exp => None,
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    op: Op,
    operands: Vec<&'a str>,
    result: &'a str,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if args.max_generations.is_some() {
        config.evolution.max_generations = args.max_generations;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.arithmetic.max_iterations = max_iterations;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.display.delay_ms = delay_ms;
    }
    let automaton = Automaton::from(&config);

    let x = args.x.as_str();
    let result = match (args.op, args.y.as_deref()) {
        (Op::Add, Some(y)) => automaton.add(x, y)?,
        (Op::Prod, Some(y)) => automaton.prod(x, y)?,
        (Op::Exp, Some(y)) => automaton.exp(x, y)?,
        (Op::Add | Op::Prod | Op::Exp, None) => {
            bail!("{:?} takes two operands", args.op)
        }
        (Op::Zero | Op::Succ | Op::Pred, Some(_)) => {
            bail!("{:?} takes one operand", args.op)
        }
        (Op::Zero, None) => automaton.zero(x)?,
        (Op::Succ, None) => automaton.succ(x)?,
        (Op::Pred, None) => automaton.pred(x)?,
    };

    if args.trace || config.display.show_evolving {
        match args.op.rule() {
            Some(Rule::Predecessor) if automaton.is_zero(x)? => {
                println!("{x} is zero; Pred leaves it unchanged");
            }
            Some(rule) => trace(x, rule, config.display.delay_ms)?,
            None => tracing::warn!("tracing only applies to zero, succ, and pred"),
        }
    }

    if args.json {
        let mut operands = vec![x];
        operands.extend(args.y.as_deref());
        let output = Output {
            op: args.op,
            operands,
            result: &result,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

/// Prints the encoded input and each changed generation. The run already
/// succeeded, so it is known to stabilize.
fn trace(x: &str, rule: Rule, delay_ms: u64) -> Result<()> {
    let evolution = Evolution::new(encode(x)?, rule);
    println!("{rule} {x}");
    println!("{:>4}  {}", 0, evolution.current());
    for (n, generation) in evolution.enumerate() {
        pause(delay_ms);
        println!("{:>4}  {generation}", n + 1);
    }
    Ok(())
}
