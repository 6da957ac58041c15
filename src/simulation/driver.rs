//! Driving loop: seeding, pacing and frame emission
//!
//! The automaton never sleeps or decides how long to run; everything
//! time-related lives here.

use std::thread;
use std::time::{Duration, Instant};

use crate::automaton::{AutomatonGrid, Glyphs, RandomSource};
use crate::core::config::SimulationConfig;
use crate::simulation::output::{PhaseSummary, RunSummary, SeedKind};

/// A rendered generation handed to the caller's sink
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub seed_kind: SeedKind,
    pub generation: u64,
    pub population: usize,
    pub text: &'a str,
}

/// Seed from the configured pattern file, falling back to random seeding
///
/// Returns the kind of seeding that actually happened and the number of
/// rows the pattern was missing.
pub fn seed_with_fallback<S: RandomSource + ?Sized>(
    grid: &mut AutomatonGrid,
    config: &SimulationConfig,
    rng: &mut S,
) -> (SeedKind, usize) {
    let Some(path) = config.pattern_path.as_deref() else {
        tracing::warn!("No pattern file configured, seeding randomly");
        grid.seed_randomly(rng);
        return (SeedKind::Random, 0);
    };

    match grid.seed_from_path(path) {
        Ok(report) => (SeedKind::FromFile, report.rows_zero_filled),
        Err(e) => {
            tracing::warn!("Failed to load pattern {}: {}. Seeding randomly", path.display(), e);
            grid.seed_randomly(rng);
            (SeedKind::Random, 0)
        }
    }
}

/// Emit the seeded generation, then advance `config.generations` times
///
/// Sleeps `config.step_delay_ms` before every advance (never when zero).
pub fn run_phase<F>(
    grid: &mut AutomatonGrid,
    seed_kind: SeedKind,
    rows_zero_filled: usize,
    config: &SimulationConfig,
    mut sink: F,
) -> PhaseSummary
where
    F: FnMut(Frame<'_>),
{
    let glyphs = Glyphs::from(config);
    let delay = Duration::from_millis(config.step_delay_ms);
    let initial_population = grid.population();

    let mut emit = |grid: &AutomatonGrid| {
        let text = grid.render_with(glyphs);
        sink(Frame {
            seed_kind,
            generation: grid.generation(),
            population: grid.population(),
            text: &text,
        });
    };

    emit(grid);
    for _ in 0..config.generations {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        grid.advance();
        emit(grid);
    }

    PhaseSummary {
        seed_kind,
        dimension: grid.dimension(),
        generations: grid.generation(),
        initial_population,
        final_population: grid.population(),
        rows_zero_filled,
    }
}

/// The classic two-phase session: the configured pattern, then a random board
///
/// Both phases share one board, so the random phase is a reseed.
pub fn run_session<S, F>(config: &SimulationConfig, rng: &mut S, mut sink: F) -> RunSummary
where
    S: RandomSource + ?Sized,
    F: FnMut(Frame<'_>),
{
    let start = Instant::now();
    let mut grid = AutomatonGrid::new(config.dimension);

    tracing::info!(
        dimension = config.dimension,
        generations = config.generations,
        "Starting life session"
    );

    let (kind, zero_filled) = seed_with_fallback(&mut grid, config, rng);
    let file_phase = run_phase(&mut grid, kind, zero_filled, config, &mut sink);

    grid.seed_randomly(rng);
    let random_phase = run_phase(&mut grid, SeedKind::Random, 0, config, &mut sink);

    let elapsed = start.elapsed();
    tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "Life session finished");

    RunSummary {
        phases: vec![file_phase, random_phase],
        pi_estimate: None,
        rng_seed: config.seed,
        simulation_time_ms: elapsed.as_millis() as u64,
    }
}
