//! Double-buffered Game of Life board
//!
//! `AutomatonGrid` keeps the displayed generation and its successor side by
//! side. The successor is computed eagerly after every seeding and every
//! advance, always from an untouched `current`, so the pair is never seen
//! half-updated.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::automaton::grid::Grid;
use crate::automaton::render::{render_grid, Glyphs};
use crate::automaton::rules;
use crate::automaton::seed::{self, LoadReport, RandomSource};
use crate::core::error::Result;
use crate::core::types::{Cell, Generation};

#[derive(Debug, Clone)]
pub struct AutomatonGrid {
    current: Grid<Cell>,
    next: Grid<Cell>,
    generation: Generation,
}

impl AutomatonGrid {
    /// Allocate an all-dead N×N board
    pub fn new(dimension: usize) -> Self {
        Self {
            current: Grid::new(dimension),
            next: Grid::new(dimension),
            generation: 0,
        }
    }

    pub fn dimension(&self) -> usize {
        self.current.dimension()
    }

    /// Advances since the last seeding
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// State of one cell of the current generation
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.current.get(row, col).copied()
    }

    /// Live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|c| c.is_alive()).count()
    }

    /// Load generation 0 from rows of '0'/'1' digits
    ///
    /// Whitespace within a line is ignored. Lines past row N and characters
    /// past column N are ignored.
    ///
    /// Short input is intentionally tolerated: missing rows (and missing
    /// trailing columns) are loaded as dead cells rather than reported. Only
    /// a present character other than '0' or '1' is an error.
    ///
    /// The whole source is parsed before anything is committed, so on
    /// `MalformedGridData` or `IoFailure` the board is left exactly as it was.
    pub fn seed_from_source<R: BufRead>(&mut self, source: R) -> Result<LoadReport> {
        let mut staged = Grid::new(self.dimension());
        let report = seed::parse_rows(source, &mut staged)?;

        self.current = staged;
        self.commit_seed();

        tracing::debug!(
            rows_read = report.rows_read,
            rows_zero_filled = report.rows_zero_filled,
            population = self.population(),
            "Seeded board from source"
        );
        Ok(report)
    }

    /// Open `path` and seed from its contents
    pub fn seed_from_path(&mut self, path: &Path) -> Result<LoadReport> {
        let file = File::open(path)?;
        self.seed_from_source(BufReader::new(file))
    }

    /// One independent coin flip per cell: alive when the sample is below 0.5
    pub fn seed_randomly<S: RandomSource + ?Sized>(&mut self, rng: &mut S) {
        seed::fill_random(&mut self.current, rng);
        self.commit_seed();

        tracing::debug!(population = self.population(), "Seeded board randomly");
    }

    /// Promote the precomputed successor and compute the one after it
    ///
    /// Well-defined on an unseeded board, which stays all-dead.
    pub fn advance(&mut self) {
        // The old `current` becomes scratch space; step_into overwrites all of it
        std::mem::swap(&mut self.current, &mut self.next);
        rules::step_into(&self.current, &mut self.next);
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            population = self.population(),
            "Advanced board"
        );
    }

    /// Current generation with the default glyphs
    pub fn render(&self) -> String {
        self.render_with(Glyphs::default())
    }

    pub fn render_with(&self, glyphs: Glyphs) -> String {
        render_grid(&self.current, glyphs)
    }

    fn commit_seed(&mut self) {
        rules::step_into(&self.current, &mut self.next);
        self.generation = 0;
    }
}

impl fmt::Display for AutomatonGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
