//! Moore-neighborhood counting and the B3/S23 transition

use crate::automaton::grid::Grid;
use crate::core::types::Cell;

/// Live cells among the in-bounds Moore neighbors of (row, col)
///
/// Positions outside the board are skipped, so corners see at most 3
/// candidates and non-corner edges at most 5.
pub fn live_neighbors(grid: &Grid<Cell>, row: usize, col: usize) -> u8 {
    grid.neighbors(row, col)
        .filter(|&(r, c)| grid.get(r, c).is_some_and(|cell| cell.is_alive()))
        .count() as u8
}

/// Fate of one cell given its live-neighbor count
#[inline]
pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Write the successor of `current` into `next`
///
/// Reads only from `current`; every cell of `next` is overwritten.
pub fn step_into(current: &Grid<Cell>, next: &mut Grid<Cell>) {
    debug_assert_eq!(current.dimension(), next.dimension());

    let n = current.dimension();
    for row in 0..n {
        for col in 0..n {
            let cell = current.get(row, col).copied().unwrap_or_default();
            next.set(row, col, next_state(cell, live_neighbors(current, row, col)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> Grid<Cell> {
        let mut grid = Grid::new(n);
        grid.iter_mut().for_each(|c| *c = Cell::Alive);
        grid
    }

    #[test]
    fn test_next_state_table() {
        for count in 0..=8u8 {
            let survives = count == 2 || count == 3;
            assert_eq!(next_state(Cell::Alive, count).is_alive(), survives, "alive with {}", count);
            assert_eq!(next_state(Cell::Dead, count).is_alive(), count == 3, "dead with {}", count);
        }
    }

    #[test]
    fn test_full_board_neighbor_counts() {
        let grid = filled(4);
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
        assert_eq!(live_neighbors(&grid, 0, 3), 3);
        assert_eq!(live_neighbors(&grid, 3, 0), 3);
        assert_eq!(live_neighbors(&grid, 3, 3), 3);
        assert_eq!(live_neighbors(&grid, 0, 1), 5);
        assert_eq!(live_neighbors(&grid, 2, 3), 5);
        assert_eq!(live_neighbors(&grid, 1, 1), 8);
    }

    #[test]
    fn test_self_is_not_counted() {
        let mut grid = Grid::new(3);
        grid.set(1, 1, Cell::Alive);
        assert_eq!(live_neighbors(&grid, 1, 1), 0);
        assert_eq!(live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn test_no_wraparound() {
        let mut grid = Grid::new(5);
        grid.set(0, 4, Cell::Alive);
        // (0, 0) would see (0, 4) on a torus
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
        assert_eq!(live_neighbors(&grid, 4, 4), 0);
    }

    #[test]
    fn test_step_is_simultaneous() {
        // A row-scan that updated in place would let (0,1)'s birth feed (0,2)
        let mut current = Grid::new(3);
        for col in 0..3 {
            current.set(1, col, Cell::Alive);
        }
        let mut next = Grid::new(3);
        step_into(&current, &mut next);

        for row in 0..3 {
            for col in 0..3 {
                let expected = col == 1;
                assert_eq!(next.get(row, col).unwrap().is_alive(), expected, "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_step_overwrites_stale_next() {
        let current = Grid::new(3);
        let mut next = filled(3);
        step_into(&current, &mut next);
        assert!(next.iter().all(|c| !c.is_alive()));
    }
}
