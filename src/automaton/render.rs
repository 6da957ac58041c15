//! Text rendering of a generation

use crate::automaton::grid::Grid;
use crate::core::config::SimulationConfig;
use crate::core::types::Cell;

/// Characters used for live and dead cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub const fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    #[inline]
    pub fn glyph(&self, cell: Cell) -> char {
        if cell.is_alive() {
            self.alive
        } else {
            self.dead
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new('x', ' ')
    }
}

impl From<&SimulationConfig> for Glyphs {
    fn from(config: &SimulationConfig) -> Self {
        Self::new(config.alive_glyph, config.dead_glyph)
    }
}

/// One line per row, each newline-terminated, no header or footer
pub fn render_grid(grid: &Grid<Cell>, glyphs: Glyphs) -> String {
    let n = grid.dimension();
    let mut out = String::with_capacity(n * (n + 1));
    for row in grid.rows() {
        out.extend(row.iter().map(|&cell| glyphs.glyph(cell)));
        out.push('\n');
    }
    out
}
