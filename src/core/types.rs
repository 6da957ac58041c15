//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// State of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Decode a seeding digit ('0' or '1')
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Dead),
            '1' => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Generation counter (number of advances since the last seeding)
pub type Generation = u64;
