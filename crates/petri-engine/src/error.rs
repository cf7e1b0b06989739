//! Error types for the `petri-engine` crate.
//!
//! The engine raises errors only for malformed pattern text and invalid
//! raw-part construction. Out-of-bounds cell access is deliberately not an
//! error: reads return dead and writes are ignored, so UI code translating
//! imprecise input (edge clicks, stale coordinates) can never crash the
//! simulation.

/// Errors raised while parsing a text pattern.
///
/// Every variant names the offending line or character so the failure can be
/// shown to the user verbatim. Line and column numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The input contained no lines after trailing whitespace was stripped.
    #[error("pattern is empty")]
    Empty,

    /// A line's length did not match the required square dimension.
    #[error("line {line} has length {len}, expected {expected}")]
    LineLength {
        /// 1-based number of the offending line.
        line: usize,
        /// Actual character count of the line.
        len: usize,
        /// Required length (equal to the total number of lines).
        expected: usize,
    },

    /// A character other than `'0'` or `'1'` was found.
    #[error("invalid character '{found}' at line {line}, column {column}")]
    InvalidCharacter {
        /// 1-based line number of the offending character.
        line: usize,
        /// 1-based column number of the offending character.
        column: usize,
        /// The offending character.
        found: char,
    },
}

/// Errors raised when assembling a grid from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The cell buffer length did not match the requested dimensions.
    #[error("cell buffer holds {actual} cells, expected {expected} for a {rows}x{cols} grid")]
    CellCountMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Required buffer length (`rows * cols`).
        expected: usize,
        /// Length of the buffer that was supplied.
        actual: usize,
    },
}
