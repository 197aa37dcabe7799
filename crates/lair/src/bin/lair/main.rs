//! Command-line front end for the lair solver.
//!
//! # Usage
//!
//! ```bash
//! # Solve 4 logs and draw the piles before and after
//! cargo run -p lair -- solve --size 4 --show
//!
//! # Move counts for sizes 1..=12 next to 2^size
//! cargo run -p lair -- growth --max 12
//! cargo run -p lair -- growth --max 12 --format json
//!
//! # Check every invariant on a solved lair and on a random walk
//! DST_SEED=12345 cargo run -p lair -- check --size 5
//! ```
//!
//! Set `RUST_LOG=lair=debug` (or `trace` for every move) for more output.

mod render;

use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use lair::{
    move_growth, observe_fn, AuditedLair, GrowthConfig, GrowthPoint, Lair, LairError, Move,
    Reporter, Strategy, GROWTH_SIZE_MAX,
};
use lair_core::{LairPropertyChecker, PropertyChecker};
use lair_dst::{get_or_generate_seed, DeterministicRng, RandomWalk};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lair", about = "Move a pile of logs from the Forest to the Hideout")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve one lair and print the number of moves
    Solve {
        /// Number of logs
        #[arg(short, long, allow_negative_numbers = true)]
        size: i64,
        /// Use the explicit frame stack instead of recursion
        #[arg(long)]
        iterative: bool,
        /// Draw the piles before and after solving
        #[arg(long)]
        show: bool,
        /// Draw the piles after every move
        #[arg(long)]
        trace: bool,
    },
    /// Print move counts for sizes 1..=max next to 2^size
    Growth {
        /// Largest size to solve
        #[arg(short, long, default_value_t = GrowthConfig::default().size_max)]
        max: u32,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        #[arg(long)]
        iterative: bool,
    },
    /// Run the property checker on a solved lair and a random walk
    Check {
        #[arg(short, long, default_value_t = 5)]
        size: u32,
        /// Walk seed (0 is treated as 1); defaults to DST_SEED or a random seed
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 500)]
        walk_steps: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn strategy(iterative: bool) -> Strategy {
    if iterative {
        Strategy::Iterative
    } else {
        Strategy::Recursive
    }
}

/// Prints each growth sample as a table row as soon as it is solved.
struct TableReporter;

impl Reporter for TableReporter {
    fn report(&mut self, size: u32, moves: u64) {
        println!("{:>4}  {:>12}  {:>12}", size, moves, 1u128 << size);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lair=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Command::Solve {
            size,
            iterative,
            show,
            trace,
        } => {
            let mut lair = Lair::from_signed(size)?;
            if show || trace {
                print!("{}", render::render(&lair));
            }

            let mut observer = observe_fn(|mv: &Move, lair: &Lair| {
                if trace {
                    println!("{}", mv);
                    print!("{}", render::render(lair));
                }
            });
            let moves = lair.solve_with(strategy(iterative), &mut observer)?;

            if show && !trace {
                print!("{}", render::render(&lair));
            }
            println!(
                "Moved {} logs from the Forest to the Hideout in {} moves",
                lair.size(),
                moves
            );
            Ok(ExitCode::SUCCESS)
        }

        Command::Growth {
            max,
            format,
            iterative,
        } => {
            let config = GrowthConfig::default()
                .with_size_max(max)
                .with_strategy(strategy(iterative));

            match format {
                Format::Table => {
                    config.validate()?;
                    println!("{:>4}  {:>12}  {:>12}", "size", "moves", "2^size");
                    move_growth(&config, &mut TableReporter)?;
                }
                Format::Json => {
                    let mut collected: Vec<GrowthPoint> = Vec::new();
                    let points = move_growth(&config, &mut collected)?;
                    println!("{}", serde_json::to_string_pretty(&points)?);
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Check {
            size,
            seed,
            walk_steps,
        } => {
            // The audit keeps every move in memory.
            if size > GROWTH_SIZE_MAX {
                return Err(LairError::InvalidSize {
                    size: i64::from(size),
                }
                .into());
            }
            let seed = match seed {
                Some(seed) => seed.max(1),
                None => get_or_generate_seed()?,
            };
            let mut holds = true;

            for strategy in [Strategy::Recursive, Strategy::Iterative] {
                let audited = AuditedLair::solve(size, strategy)?;
                let summary = LairPropertyChecker::new(&audited)
                    .expect_optimal()
                    .summary();
                println!("Solved lair ({} logs, {}):", size, strategy);
                println!("{}", summary.format_report());
                holds &= summary.failed == 0;
            }

            let mut rng = DeterministicRng::new(seed);
            let walk = RandomWalk::run(size, walk_steps, &mut rng);
            let summary = LairPropertyChecker::new(&walk).with_seed(seed).summary();
            println!(
                "Random walk ({} logs, {} moves, DST_SEED={}):",
                size,
                walk_steps,
                seed
            );
            println!("{}", summary.format_report());
            holds &= summary.failed == 0;

            info!(size, seed, holds, "property check finished");
            Ok(if holds {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
