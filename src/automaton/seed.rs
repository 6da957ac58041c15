//! Seeding strategies: encoded row data and per-cell coin flips

use std::io::BufRead;

use rand::Rng;

use crate::automaton::grid::Grid;
use crate::core::error::{LifeError, Result};
use crate::core::types::Cell;

/// Samples strictly below this are alive
pub const ALIVE_PROBABILITY: f64 = 0.5;

/// Source of uniform samples in [0, 1)
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded `ChaCha8Rng` gives
/// reproducible boards. Tests can plug in constant sources.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Per-row bookkeeping from a source load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows actually present in the source
    pub rows_read: usize,
    /// Rows absent from the source, filled with dead cells
    pub rows_zero_filled: usize,
}

/// Parse up to `grid.dimension()` lines of '0'/'1' digits into `grid`
///
/// Whitespace anywhere in a line is ignored. Characters past column N and
/// lines past row N are neither read nor validated.
///
/// Short input is not an error: absent rows, and missing trailing columns
/// of a present row, become dead cells. A present character other than '0'
/// or '1' fails with [`LifeError::MalformedGridData`]. `grid` may be
/// partially written on failure, so callers should parse into a staging
/// grid.
pub fn parse_rows<R: BufRead>(source: R, grid: &mut Grid<Cell>) -> Result<LoadReport> {
    let n = grid.dimension();
    let mut lines = source.lines();
    let mut report = LoadReport::default();

    for row in 0..n {
        let Some(line) = lines.next().transpose()? else {
            // Source exhausted: remaining rows stay dead
            for r in row..n {
                if let Some(cells) = grid.row_mut(r) {
                    cells.fill(Cell::Dead);
                }
            }
            report.rows_zero_filled = n - row;
            break;
        };
        report.rows_read += 1;

        let Some(cells) = grid.row_mut(row) else {
            break;
        };
        cells.fill(Cell::Dead);

        let digits = line.chars().filter(|c| !c.is_whitespace());
        for (column, (slot, c)) in cells.iter_mut().zip(digits).enumerate() {
            *slot = Cell::from_digit(c).ok_or(LifeError::MalformedGridData {
                row,
                column,
                found: c,
            })?;
        }
    }

    Ok(report)
}

/// Flip one coin per cell
pub fn fill_random<S: RandomSource + ?Sized>(grid: &mut Grid<Cell>, rng: &mut S) {
    for cell in grid.iter_mut() {
        *cell = Cell::from(rng.next_unit() < ALIVE_PROBABILITY);
    }
}
