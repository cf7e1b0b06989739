//! Core simulation engine for Conway's Game of Life.
//!
//! This crate is the whole model layer of the Petri simulator: a bounded
//! rectangular grid of live/dead cells, synchronous generation stepping
//! under the B3/S23 rule, and a parser for the plain-text square pattern
//! format. It is deliberately free of UI, I/O scheduling, and logging --
//! the engine reports failures through [`Result`], and the embedding
//! controller decides how to surface them.
//!
//! # Modules
//!
//! - [`error`] -- Typed, located errors for pattern parsing and raw-part
//!   grid construction.
//! - [`grid`] -- [`Grid`] ownership and bounds-permissive cell access, plus
//!   [`GridSnapshot`] copies for safe external consumption.
//! - [`pattern`] -- Validating parser for the `n` x `n` text format.
//! - [`step`] -- Pure neighbor counting and the generation transition.
//!
//! # Concurrency
//!
//! Everything here is single-threaded and synchronous; each operation runs
//! to completion in O(rows x cols). Multi-threaded embedders must keep a
//! single logical stepper owning the [`Grid`] and hand concurrent readers
//! [`GridSnapshot`] copies, never the live grid.

pub mod error;
pub mod grid;
pub mod pattern;
pub mod step;

// Re-export primary types at crate root.
pub use error::{GridError, PatternError};
pub use grid::{CellState, Grid, GridSnapshot};
pub use pattern::Pattern;
pub use step::{NeighborField, advance, count_neighbors};
