//! Pattern-file parsing for the plain-text square format.
//!
//! A pattern file holds exactly `n` lines of exactly `n` characters each,
//! every character `'0'` (dead) or `'1'` (alive). Trailing whitespace at
//! the end of the input is stripped before the lines are split. Validation
//! runs as a sequential scan that fails fast with a located, typed error:
//! empty input first, then line lengths, then characters.

use crate::error::PatternError;
use crate::grid::CellState;

/// A validated square pattern parsed from text.
///
/// Holding a `Pattern` is proof the input passed every format check; the
/// cell buffer is guaranteed to contain exactly `size * size` entries, so
/// converting into a [`Grid`](crate::grid::Grid) is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    size: usize,
    cells: Vec<CellState>,
}

impl Pattern {
    /// Parse pattern text into a validated pattern.
    ///
    /// # Errors
    ///
    /// - [`PatternError::Empty`] when nothing remains after stripping
    ///   trailing whitespace.
    /// - [`PatternError::LineLength`] when any line's character count
    ///   differs from the number of lines (the grid must be square).
    /// - [`PatternError::InvalidCharacter`] for anything other than `'0'`
    ///   or `'1'`.
    ///
    /// Line lengths are checked for the whole input before any characters
    /// are inspected, so a length error is always reported in preference
    /// to a character error on a later line.
    pub fn parse(content: &str) -> Result<Self, PatternError> {
        let trimmed = content.trim_end();
        if trimmed.is_empty() {
            return Err(PatternError::Empty);
        }

        let lines: Vec<&str> = trimmed.lines().collect();
        let size = lines.len();

        // Length pass: n lines define an n x n square.
        for (index, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(PatternError::LineLength {
                    line: index.saturating_add(1),
                    len,
                    expected: size,
                });
            }
        }

        // Character pass: only '0' and '1' are meaningful.
        let mut cells = Vec::with_capacity(size.saturating_mul(size));
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let state = match ch {
                    '0' => CellState::Dead,
                    '1' => CellState::Alive,
                    other => {
                        return Err(PatternError::InvalidCharacter {
                            line: row.saturating_add(1),
                            column: col.saturating_add(1),
                            found: other,
                        });
                    }
                };
                cells.push(state);
            }
        }

        Ok(Self { size, cells })
    }

    /// Edge length of the square pattern.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of live cells in the pattern.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Decompose into `(size, cells)` for grid construction.
    pub(crate) fn into_parts(self) -> (usize, Vec<CellState>) {
        (self.size, self.cells)
    }
}
