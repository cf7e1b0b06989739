//! Integration tests driving canonical Life patterns through the public
//! engine API, the same way an embedding controller would.

#![allow(clippy::unwrap_used)]

use petri_engine::{CellState, Grid, advance};

/// Build a grid from pattern text, panicking on malformed fixtures.
fn grid_from(text: &str) -> Grid {
    let mut grid = Grid::new(0, 0);
    grid.load_from_text(text).unwrap();
    grid
}

/// Collect the live coordinates of a grid, row-major.
fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let (rows, cols) = grid.dimensions();
    let mut alive = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if grid.get(row, col).is_alive() {
                alive.push((row, col));
            }
        }
    }
    alive
}

#[test]
fn glider_translates_one_cell_diagonally_every_four_generations() {
    let mut grid = grid_from(
        "00000000\n\
         00100000\n\
         00010000\n\
         01110000\n\
         00000000\n\
         00000000\n\
         00000000\n\
         00000000",
    );
    assert_eq!(
        live_cells(&grid),
        vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
    );

    for _ in 0..4 {
        grid = advance(&grid);
    }

    // After a full glider period every live cell has moved down-right by
    // exactly (1, 1).
    assert_eq!(
        live_cells(&grid),
        vec![(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)]
    );
}

#[test]
fn toad_returns_to_its_starting_state_after_two_generations() {
    let start = grid_from(
        "000000\n\
         000000\n\
         001110\n\
         011100\n\
         000000\n\
         000000",
    );

    let once = advance(&start);
    assert_ne!(once, start);

    let twice = advance(&once);
    assert_eq!(twice, start);
}

#[test]
fn beacon_blinks_its_center_corners() {
    let start = grid_from(
        "000000\n\
         011000\n\
         011000\n\
         000110\n\
         000110\n\
         000000",
    );

    let once = advance(&start);
    // The two inner corner cells die in phase two.
    assert_eq!(once.get(2, 2), CellState::Dead);
    assert_eq!(once.get(3, 3), CellState::Dead);

    let twice = advance(&once);
    assert_eq!(twice, start);
}

#[test]
fn everything_on_a_sparse_grid_eventually_dies_out() {
    // Two far-apart live cells: both isolated, both dead next generation,
    // and the grid stays empty from then on.
    let mut grid = Grid::new(10, 10);
    grid.set(1, 1, CellState::Alive);
    grid.set(8, 8, CellState::Alive);

    grid = advance(&grid);
    assert_eq!(grid.live_count(), 0);

    grid = advance(&grid);
    assert_eq!(grid.live_count(), 0);
}

#[test]
fn loading_a_new_pattern_resizes_the_world() {
    let mut grid = grid_from("11\n11");
    assert_eq!(grid.dimensions(), (2, 2));

    grid.load_from_text("010\n111\n010").unwrap();
    assert_eq!(grid.dimensions(), (3, 3));
    assert_eq!(grid.live_count(), 5);

    // A failed reload keeps the 3x3 world fully intact.
    let before = grid.snapshot();
    assert!(grid.load_from_text("0101\n111\n010").is_err());
    assert_eq!(grid.snapshot(), before);
}
