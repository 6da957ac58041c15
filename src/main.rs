//! Life Grid - Entry Point
//!
//! Interactive menu host: estimate π, run the two-phase life simulation
//! (pattern file, then a random board), or exit.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use life_grid::core::error::Result;
use life_grid::core::SimulationConfig;
use life_grid::montecarlo::estimate_pi;
use life_grid::simulation::{run_session, SeedKind};

/// Game of Life and Monte Carlo π playground
#[derive(Parser, Debug)]
#[command(name = "life-grid")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sample count for the π estimate (overrides the config)
    #[arg(long)]
    pi_samples: Option<u64>,

    /// Pattern file for the first simulation phase (overrides the config)
    #[arg(long)]
    pattern: Option<PathBuf>,
}

enum MenuChoice {
    Pi,
    Life,
    Exit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("life_grid=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(samples) = args.pi_samples {
        config.pi_samples = samples;
    }
    if let Some(pattern) = args.pattern {
        config.pattern_path = Some(pattern);
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(seed, "Life Grid starting");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(choice) = prompt_choice(&mut lines)? else {
            // stdin closed
            break;
        };

        match choice {
            MenuChoice::Pi => match estimate_pi(config.pi_samples, &mut rng) {
                Ok(pi) => println!("The estimated value of PI is {}", pi),
                Err(e) => println!("Could not estimate PI: {}", e),
            },
            MenuChoice::Life => {
                let summary = run_session(&config, &mut rng, |frame| {
                    if frame.generation == 0 {
                        match frame.seed_kind {
                            SeedKind::FromFile => println!("SIMULATION WITH BOARD READ FROM FILE"),
                            SeedKind::Random => println!("SIMULATION WITH RANDOMLY GENERATED BOARD"),
                        }
                    }
                    println!("{}", frame.text);
                });
                print!("{}", summary.summary());
            }
            MenuChoice::Exit => {
                println!("Exiting...");
                break;
            }
        }
    }

    Ok(())
}

/// Show the menu until a valid option is entered. `None` on end of input.
fn prompt_choice<B: BufRead>(lines: &mut io::Lines<B>) -> Result<Option<MenuChoice>> {
    loop {
        println!("Choose an option:");
        println!("  1. Estimate PI");
        println!("  2. Game of Life simulation");
        println!("  3. Exit");
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };

        match line.trim().parse::<u32>() {
            Ok(1) => return Ok(Some(MenuChoice::Pi)),
            Ok(2) => return Ok(Some(MenuChoice::Life)),
            Ok(3) => return Ok(Some(MenuChoice::Exit)),
            Ok(_) => println!("Invalid option. Please enter 1, 2 or 3."),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}
