//! Generation stepping: neighbor counting and the B3/S23 transition rule.
//!
//! The step functions are pure: they read one grid snapshot and produce a
//! fresh result, never mutating in place. That keeps the update synchronous
//! by construction; a cell's neighbor count can never observe a neighbor
//! that was already advanced within the same generation.
//!
//! The rule is the canonical Game of Life rule and nothing else: a live
//! cell with 2 or 3 live neighbors survives, a dead cell with exactly 3
//! live neighbors is born, every other cell is dead next generation.

use serde::{Deserialize, Serialize};

use crate::grid::{CellState, Grid};

/// The 8 orthogonal and diagonal neighbor offsets as `(row, col)` deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Per-cell live-neighbor counts computed from one grid snapshot.
///
/// Same dimensions as the source grid; every element is in `0..=8`.
/// Intermediate product of [`count_neighbors`], not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborField {
    rows: usize,
    cols: usize,
    counts: Vec<u8>,
}

impl NeighborField {
    /// Neighbor count at `(row, col)`, or 0 for out-of-bounds coordinates.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row < self.rows && col < self.cols {
            row.checked_mul(self.cols)
                .and_then(|base| base.checked_add(col))
                .and_then(|idx| self.counts.get(idx))
                .copied()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Dimensions as `(rows, cols)`.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Count the live cells among the 8 neighbors of `(row, col)`.
///
/// Offsets that fall outside the grid read as dead: the world is a bounded
/// rectangle with no wraparound.
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count: u8 = 0;
    for (row_offset, col_offset) in NEIGHBOR_OFFSETS {
        let neighbor = row
            .checked_add_signed(row_offset)
            .zip(col.checked_add_signed(col_offset));
        if let Some((neighbor_row, neighbor_col)) = neighbor {
            if grid.get(neighbor_row, neighbor_col).is_alive() {
                count = count.saturating_add(1);
            }
        }
    }
    count
}

/// Compute the live-neighbor count for every cell of `grid`.
///
/// The whole field is derived from the single input snapshot, so counts
/// are mutually consistent across the grid.
pub fn count_neighbors(grid: &Grid) -> NeighborField {
    let (rows, cols) = grid.dimensions();
    let mut counts = Vec::with_capacity(rows.saturating_mul(cols));
    for row in 0..rows {
        for col in 0..cols {
            counts.push(live_neighbors(grid, row, col));
        }
    }
    NeighborField { rows, cols, counts }
}

/// Apply one generation of the B3/S23 rule, returning the next grid.
///
/// Total over every valid grid, including 0x0 and 1x1 (a lone live cell on
/// a 1x1 grid always dies: its neighbor count is 0). The input grid is
/// untouched; the caller decides whether to replace it with the result.
pub fn advance(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let field = count_neighbors(grid);
    let mut next = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let alive = grid.get(row, col).is_alive();
            let next_state = match (alive, field.get(row, col)) {
                (true, 2 | 3) | (false, 3) => CellState::Alive,
                _ => CellState::Dead,
            };
            if next_state.is_alive() {
                next.set(row, col, next_state);
            }
        }
    }
    next
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Build a grid from the same text format the pattern loader accepts.
    fn grid_from(text: &str) -> Grid {
        let mut grid = Grid::new(0, 0);
        grid.load_from_text(text).unwrap();
        grid
    }

    // ------------------------------------------------------------------
    // Neighbor counting
    // ------------------------------------------------------------------

    #[test]
    fn counts_stay_within_bounds() {
        let grid = grid_from("111\n111\n111");
        let field = count_neighbors(&grid);
        for row in 0..3 {
            for col in 0..3 {
                assert!(field.get(row, col) <= 8);
            }
        }
        // The center of a fully live 3x3 block sees all 8 neighbors.
        assert_eq!(field.get(1, 1), 8);
    }

    #[test]
    fn single_live_cell_counts() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, CellState::Alive);
        let field = count_neighbors(&grid);

        // The live cell itself counts only its neighbors, all dead.
        assert_eq!(field.get(2, 2), 0);
        // Each of the 8 surrounding positions sees exactly one live cell.
        for (row, col) in [
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 1),
            (3, 2),
            (3, 3),
        ] {
            assert_eq!(field.get(row, col), 1, "at ({row}, {col})");
        }
        // Two steps away, nothing is visible.
        assert_eq!(field.get(0, 0), 0);
        assert_eq!(field.get(4, 4), 0);
    }

    #[test]
    fn corner_cell_has_three_inbound_neighbor_positions() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, CellState::Alive);
        let field = count_neighbors(&grid);

        assert_eq!(field.get(0, 1), 1);
        assert_eq!(field.get(1, 0), 1);
        assert_eq!(field.get(1, 1), 1);
        // No wraparound: the far corner sees nothing.
        assert_eq!(field.get(3, 3), 0);
    }

    #[test]
    fn neighbor_field_is_zero_out_of_bounds() {
        let grid = grid_from("11\n11");
        let field = count_neighbors(&grid);
        assert_eq!(field.get(2, 0), 0);
        assert_eq!(field.get(0, 2), 0);
        assert_eq!(field.dimensions(), (2, 2));
    }

    // ------------------------------------------------------------------
    // Transition rule
    // ------------------------------------------------------------------

    #[test]
    fn block_is_a_still_life() {
        let grid = grid_from("0000\n0110\n0110\n0000");
        let next = advance(&grid);
        assert_eq!(next, grid);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid_from("00000\n00000\n01110\n00000\n00000");
        let vertical = grid_from("00000\n00100\n00100\n00100\n00000");

        let once = advance(&horizontal);
        assert_eq!(once, vertical);

        let twice = advance(&once);
        assert_eq!(twice, horizontal);
    }

    #[test]
    fn lone_cell_dies_of_isolation() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, CellState::Alive);
        let next = advance(&grid);
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn four_neighbors_kill_by_overcrowding() {
        // Center cell is alive with 4 live neighbors in a plus shape.
        let grid = grid_from("010\n111\n010");
        let next = advance(&grid);
        assert_eq!(next.get(1, 1), CellState::Dead);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let grid = grid_from("000\n111\n000");
        let next = advance(&grid);
        assert_eq!(next.get(0, 1), CellState::Alive);
        assert_eq!(next.get(2, 1), CellState::Alive);
    }

    #[test]
    fn dead_cell_with_two_or_four_neighbors_stays_dead() {
        // (2, 2) sees exactly two live cells.
        let mut two = Grid::new(5, 5);
        two.set(1, 1, CellState::Alive);
        two.set(1, 2, CellState::Alive);
        assert_eq!(advance(&two).get(2, 2), CellState::Dead);

        // (2, 2) sees exactly four live cells.
        let mut four = Grid::new(5, 5);
        four.set(1, 1, CellState::Alive);
        four.set(1, 2, CellState::Alive);
        four.set(1, 3, CellState::Alive);
        four.set(2, 1, CellState::Alive);
        assert_eq!(advance(&four).get(2, 2), CellState::Dead);
    }

    // ------------------------------------------------------------------
    // Degenerate grids
    // ------------------------------------------------------------------

    #[test]
    fn zero_sized_grid_advances_to_zero_sized_grid() {
        let grid = Grid::new(0, 0);
        let next = advance(&grid);
        assert_eq!(next.dimensions(), (0, 0));
    }

    #[test]
    fn one_by_one_live_cell_always_dies() {
        let mut grid = Grid::new(1, 1);
        grid.set(0, 0, CellState::Alive);
        let next = advance(&grid);
        assert_eq!(next.get(0, 0), CellState::Dead);
    }

    #[test]
    fn advance_does_not_mutate_its_input() {
        let grid = grid_from("010\n010\n010");
        let before = grid.snapshot();
        let _next = advance(&grid);
        assert_eq!(grid.snapshot(), before);
    }
}
