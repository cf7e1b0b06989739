//! The cell grid: authoritative, bounds-checked holder of simulation state.
//!
//! A [`Grid`] owns the live/dead state of every cell in a fixed rectangle,
//! stored row-major. It is held exclusively by whoever drives the
//! simulation; everything downstream (rendering, inspection) works from
//! [`GridSnapshot`] copies taken at a known instant, so no consumer can
//! alias the buffer while it is being replaced.
//!
//! # Design Principles
//!
//! - Out-of-bounds reads return [`CellState::Dead`] and out-of-bounds
//!   writes are silently ignored. Bounds are a rendering concern, not a
//!   failure mode.
//! - Bulk replacement ([`Grid::load_from_text`]) is atomic: either the
//!   whole grid (cells and dimensions together) is replaced, or the call
//!   fails and the previous state is untouched.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, PatternError};
use crate::pattern::Pattern;

/// The state of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// The cell is dead. Freshly created grids are all dead.
    #[default]
    Dead,
    /// The cell is alive.
    Alive,
}

impl CellState {
    /// Return `true` if the cell is alive.
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Return the opposite state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// Row-major index of `(row, col)` within a `rows` x `cols` buffer, or
/// `None` when the coordinates fall outside it.
const fn index_of(rows: usize, cols: usize, row: usize, col: usize) -> Option<usize> {
    if row < rows && col < cols {
        // In-bounds coordinates cannot overflow: the full area fits in the
        // backing vector, which fits in memory.
        match row.checked_mul(cols) {
            Some(base) => base.checked_add(col),
            None => None,
        }
    } else {
        None
    }
}

/// A fixed-size rectangular grid of cells.
///
/// Invariant: `cells.len() == rows * cols` at all times; every mutation is
/// either a single in-bounds cell write or a wholesale replacement that
/// updates cells and dimensions together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with the given dimensions, all cells dead.
    ///
    /// Zero-sized grids are valid. The area saturates for dimensions no
    /// allocator could satisfy anyway.
    pub fn new(rows: usize, cols: usize) -> Self {
        let area = rows.saturating_mul(cols);
        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; area],
        }
    }

    /// Assemble a grid from explicit parts (useful for testing and state
    /// restoration).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCountMismatch`] if `cells.len()` is not
    /// exactly `rows * cols`.
    pub fn from_parts(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self, GridError> {
        let expected = rows.saturating_mul(cols);
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                rows,
                cols,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// State of the cell at `(row, col)`.
    ///
    /// Any coordinate outside `[0, rows) x [0, cols)` reads as
    /// [`CellState::Dead`]; out-of-bounds access is never an error.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        index_of(self.rows, self.cols, row, col)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or(CellState::Dead)
    }

    /// Store `state` at `(row, col)`.
    ///
    /// Out-of-bounds coordinates are silently ignored, so imprecise UI
    /// input (a click just past the edge) cannot corrupt or crash anything.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let Some(idx) = index_of(self.rows, self.cols, row, col) {
            if let Some(cell) = self.cells.get_mut(idx) {
                *cell = state;
            }
        }
    }

    /// Set every cell to dead without changing dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Read-only row-major view of the cell buffer.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Take an immutable, independently owned copy of the full grid.
    ///
    /// Mutations to the grid after this call are never visible through the
    /// snapshot, and the snapshot can never write back.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
        }
    }

    /// Parse pattern text and replace this grid's contents and dimensions.
    ///
    /// The replacement is atomic: parsing happens into a fresh buffer, and
    /// the grid is only touched once the whole pattern has validated. On
    /// error the previous state is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the located [`PatternError`] from [`Pattern::parse`].
    pub fn load_from_text(&mut self, content: &str) -> Result<(), PatternError> {
        let pattern = Pattern::parse(content)?;
        *self = Self::from(pattern);
        Ok(())
    }
}

impl From<Pattern> for Grid {
    fn from(pattern: Pattern) -> Self {
        let (size, cells) = pattern.into_parts();
        // Pattern::parse guarantees exactly size * size cells.
        Self {
            rows: size,
            cols: size,
            cells,
        }
    }
}

/// An immutable copy of a grid's state taken at one instant.
///
/// Snapshots are what renderers and other external consumers receive; they
/// share no storage with the live grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl GridSnapshot {
    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// State of the cell at `(row, col)`, dead for out-of-bounds
    /// coordinates (same permissive policy as [`Grid::get`]).
    pub fn get(&self, row: usize, col: usize) -> CellState {
        index_of(self.rows, self.cols, row, col)
            .and_then(|idx| self.cells.get(idx))
            .copied()
            .unwrap_or(CellState::Dead)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Read-only row-major view of the cell buffer.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        // max(1) keeps chunks() well-defined for zero-column grids; the
        // buffer is empty in that case so the iterator yields nothing.
        self.cells.chunks(self.cols.max(1))
    }
}
