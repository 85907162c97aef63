//! `automata-life`: Runs the 2-D life grid for a fixed number of generations.
//!
//! **Usage:**
//! ```text
//! automata-life 1011 1111 1111 1111 [--generations 4] [--show-evolving]
//! ```
//!
//! Rows are whitespace-separated; a standalone `#` ends the grid.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use automata::LifeGrid;
use automata_clients::{init_logging, load_config, pause};
use clap::{ArgAction, Parser};

/// Evolve a square life grid with the von Neumann neighborhood.
#[derive(Parser)]
#[command(name = "automata-life", about = "Run the 2-D life grid")]
struct Args {
    /// Grid rows of 0 and 1; may be given as one quoted string.
    #[arg(required = true, num_args = 1..)]
    raw: Vec<String>,

    /// Number of generations to apply.
    #[arg(long, default_value_t = 4)]
    generations: usize,

    /// Print every intermediate generation.
    #[arg(long)]
    show_evolving: bool,

    /// Pause between printed generations, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let show_evolving = args.show_evolving || config.display.show_evolving;
    let delay_ms = args.delay_ms.unwrap_or(config.display.delay_ms);

    let raw = args.raw.join(" ");
    let grid = LifeGrid::parse(&raw).with_context(|| format!("parsing grid {raw:?}"))?;
    tracing::info!(side = grid.side(), generations = args.generations, "starting grid");

    println!("==== Starting Configuration ====");
    print!("{grid}");
    println!("================================");

    let mut last = grid.clone();
    for generation in grid.generations().take(args.generations) {
        if show_evolving {
            pause(delay_ms);
            print!("{generation}");
            println!("----------------");
        }
        last = generation;
    }

    println!("===== Final Configuration =====");
    print!("{last}");
    println!("===============================");
    Ok(())
}
