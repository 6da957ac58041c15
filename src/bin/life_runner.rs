//! Headless Life Runner
//!
//! Runs the two-phase session without the interactive menu and prints a
//! text or JSON summary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use life_grid::core::error::Result;
use life_grid::core::SimulationConfig;
use life_grid::montecarlo::estimate_pi;
use life_grid::simulation::run_session;

/// Headless Game of Life runner
#[derive(Parser, Debug)]
#[command(name = "life_runner")]
#[command(about = "Run pattern and random Game of Life phases and report a summary")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pattern file of '0'/'1' rows
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    dimension: Option<usize>,

    /// Generations per phase
    #[arg(long)]
    generations: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Also estimate π with the configured sample count
    #[arg(long)]
    pi: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print every generation to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(pattern) = args.pattern {
        config.pattern_path = Some(pattern);
    }
    if let Some(dimension) = args.dimension {
        config.dimension = dimension;
    }
    if let Some(generations) = args.generations {
        config.generations = generations;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.step_delay_ms = args.delay_ms;

    let seed = config.seed.unwrap_or_else(rand::random);
    config.seed = Some(seed);
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let verbose = args.verbose;

    let mut summary = run_session(&config, &mut rng, |frame| {
        if verbose {
            eprintln!(
                "=== {:?} generation {} (population {}) ===",
                frame.seed_kind, frame.generation, frame.population
            );
            eprint!("{}", frame.text);
        }
    });

    if args.pi {
        summary.pi_estimate = Some(estimate_pi(config.pi_samples, &mut rng)?);
    }

    match args.format.as_str() {
        "json" => println!("{}", summary.to_json()?),
        _ => print!("{}", summary.summary()),
    }

    Ok(())
}
