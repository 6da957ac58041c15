//! Two-state cellular automaton (Conway's Game of Life, B3/S23)
//!
//! Fixed N×N board with a finite boundary: cells beyond the edge are
//! treated as permanently dead, there is no wraparound.

pub mod board;
pub mod grid;
pub mod render;
pub mod rules;
pub mod seed;

pub use board::AutomatonGrid;
pub use grid::Grid;
pub use render::Glyphs;
pub use seed::{LoadReport, RandomSource};
