//! Property tests for rendering and neighbor counting

use life_grid::automaton::rules::live_neighbors;
use life_grid::automaton::{AutomatonGrid, Grid};
use life_grid::core::types::Cell;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn assert_render_shape(text: &str, n: usize) {
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), n);
    assert!(text.ends_with('\n'));
    for line in lines {
        assert_eq!(line.chars().count(), n);
        assert!(line.chars().all(|c| c == 'x' || c == ' '));
    }
}

proptest! {
    #[test]
    fn render_has_n_lines_of_n_glyphs(n in 1usize..24, seed in any::<u64>(), steps in 0usize..4) {
        let mut board = AutomatonGrid::new(n);
        board.seed_randomly(&mut ChaCha8Rng::seed_from_u64(seed));
        for _ in 0..steps {
            board.advance();
        }
        assert_render_shape(&board.render(), n);
    }

    #[test]
    fn unseeded_render_is_blank(n in 1usize..24) {
        let board = AutomatonGrid::new(n);
        assert_render_shape(&board.render(), n);
        prop_assert_eq!(board.population(), 0);
    }

    #[test]
    fn render_is_idempotent(n in 1usize..24, seed in any::<u64>()) {
        let mut board = AutomatonGrid::new(n);
        board.seed_randomly(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(board.render(), board.render());
    }

    #[test]
    fn boundary_neighbor_counts_are_bounded(n in 2usize..16, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::new(n);
        for row in 0..n {
            for col in 0..n {
                grid.set(row, col, Cell::from(rng.gen_bool(0.5)));
            }
        }

        let last = n - 1;
        for &(r, c) in &[(0, 0), (0, last), (last, 0), (last, last)] {
            prop_assert!(live_neighbors(&grid, r, c) <= 3);
        }
        for i in 1..last {
            for &(r, c) in &[(0, i), (last, i), (i, 0), (i, last)] {
                prop_assert!(live_neighbors(&grid, r, c) <= 5);
            }
        }
    }

    #[test]
    fn pattern_rows_round_trip_through_render(rows in prop::collection::vec("[01]{6}", 0..=6)) {
        let source = rows.join("\n");
        let mut board = AutomatonGrid::new(6);
        board.seed_from_source(source.as_bytes()).unwrap();

        let rendered: Vec<String> = board.render().lines().map(|l| l.to_string()).collect();
        for (row, text) in rendered.iter().enumerate() {
            let expected: String = match rows.get(row) {
                Some(digits) => digits.chars().map(|d| if d == '1' { 'x' } else { ' ' }).collect(),
                None => " ".repeat(6),
            };
            prop_assert_eq!(text, &expected);
        }
    }
}
