//! Built-in seed patterns for quickly populating a grid.
//!
//! These are the canonical fixtures every Life implementation ships: still
//! lifes, small oscillators, a glider, and the R-pentomino methuselah.
//! Coordinates assume the default 50x50 grid but degrade gracefully on
//! smaller ones (out-of-bounds cells are simply skipped).

use petri_engine::{CellState, Grid};

/// A named set of live-cell coordinates stamped onto a cleared grid.
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    /// Display name.
    pub name: &'static str,
    /// Live cells as `(row, col)` coordinates.
    pub cells: &'static [(usize, usize)],
}

/// The built-in seed library.
pub const SEEDS: &[Seed] = &[
    Seed {
        name: "Glider",
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
    Seed {
        name: "Blinker",
        cells: &[(25, 24), (25, 25), (25, 26)],
    },
    Seed {
        name: "Toad",
        cells: &[(24, 25), (24, 26), (24, 27), (25, 24), (25, 25), (25, 26)],
    },
    Seed {
        name: "Beacon",
        cells: &[
            (10, 10),
            (10, 11),
            (11, 10),
            (11, 11),
            (12, 12),
            (12, 13),
            (13, 12),
            (13, 13),
        ],
    },
    Seed {
        name: "Block",
        cells: &[(20, 20), (20, 21), (21, 20), (21, 21)],
    },
    Seed {
        name: "R-pentomino",
        cells: &[(24, 26), (25, 25), (25, 26), (26, 24), (26, 25)],
    },
];

/// Clear `grid` and stamp `seed` onto it.
///
/// Cells outside the grid bounds are skipped; a small grid keeps whatever
/// part of the seed fits.
pub fn apply(grid: &mut Grid, seed: Seed) {
    grid.clear();
    for &(row, col) in seed.cells {
        grid.set(row, col, CellState::Alive);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn library_names_are_unique() {
        for (index, seed) in SEEDS.iter().enumerate() {
            let duplicates = SEEDS
                .iter()
                .enumerate()
                .filter(|&(other, candidate)| other != index && candidate.name == seed.name)
                .count();
            assert_eq!(duplicates, 0, "duplicate seed name {}", seed.name);
        }
    }

    #[test]
    fn apply_clears_before_stamping() {
        let mut grid = Grid::new(50, 50);
        grid.set(0, 0, CellState::Alive);

        let blinker = SEEDS.iter().find(|seed| seed.name == "Blinker").unwrap();
        apply(&mut grid, *blinker);

        assert_eq!(grid.get(0, 0), CellState::Dead);
        assert_eq!(grid.live_count(), 3);
        assert_eq!(grid.get(25, 25), CellState::Alive);
    }

    #[test]
    fn seeds_fit_the_default_grid() {
        for seed in SEEDS {
            let mut grid = Grid::new(50, 50);
            apply(&mut grid, *seed);
            assert_eq!(grid.live_count(), seed.cells.len(), "seed {}", seed.name);
        }
    }

    #[test]
    fn oversized_seed_cells_are_skipped_on_small_grids() {
        let mut grid = Grid::new(10, 10);
        let blinker = SEEDS.iter().find(|seed| seed.name == "Blinker").unwrap();
        apply(&mut grid, *blinker);
        // The blinker sits at row 25 and cannot fit a 10x10 grid.
        assert_eq!(grid.live_count(), 0);
    }
}
