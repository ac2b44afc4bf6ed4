use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use rand::SeedableRng;
use rand::rngs::StdRng;

use boggle_bench::bench::Benchmark;
use boggle_bench::config::{Config, Overrides};
use boggle_bench::display;
use boggle_bench::solver::ProcessSolver;
use boggle_bench::weights::WeightTable;

#[derive(Parser)]
#[command(
    name = "boggle-bench",
    version,
    about = "Average the reported solve time of a Boggle solver over random boards"
)]
struct Cli {
    /// Solver executable; receives one board letter per line on stdin [default: ./solver]
    #[arg(long)]
    solver: Option<PathBuf>,

    /// Number of trials to run [default: 100]
    #[arg(short = 'n', long = "trials")]
    trials: Option<usize>,

    /// Letters per board [default: 16]
    #[arg(long)]
    board_size: Option<usize>,

    /// Seed for board generation [default: 42]
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with any of: solver, num_trials, board_size, seed
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = base.apply(Overrides {
        solver: cli.solver,
        num_trials: cli.trials,
        board_size: cli.board_size,
        seed: cli.seed,
    });
    config.validate()?;

    log::info!(
        "running {} trials of {}-letter boards against {} (seed {})",
        config.num_trials,
        config.board_size,
        config.solver.display(),
        config.seed
    );

    let benchmark = Benchmark::new(WeightTable::english(), config.board_size, config.num_trials)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut solver = ProcessSolver::new(config.solver);

    let summary = benchmark.run(&mut rng, &mut solver)?;
    display::print_summary(&summary);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!(
            "{} {}",
            "error:".if_supports_color(Stream::Stderr, |s| s.red()),
            err
        );
        process::exit(1);
    }
}
