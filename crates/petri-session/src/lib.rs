//! Headless session controller for the Petri Life simulator.
//!
//! This crate wraps the pure [`petri-engine`](petri_engine) model in the
//! mutable state an interactive frontend needs: the running/paused state
//! machine, a generation counter, pattern loading from disk, manual cell
//! editing, a seed-pattern library, seeded random fills, cycle detection,
//! and YAML configuration. No windowing, input dispatch, or frame pacing
//! lives here; any UI loop can drive a [`Session`] and render from its
//! snapshots.
//!
//! # Modules
//!
//! - [`config`] -- Typed YAML configuration with defaults and validation.
//! - [`error`] -- [`SessionError`], separating file-system failures from
//!   pattern-syntax failures.
//! - [`seeds`] -- Built-in named seed patterns (glider, oscillators,
//!   still lifes).
//! - [`session`] -- The [`Session`] state machine itself.

pub mod config;
pub mod error;
pub mod seeds;
pub mod session;

// Re-export primary types at crate root.
pub use config::{ConfigError, SessionConfig};
pub use error::SessionError;
pub use seeds::{SEEDS, Seed};
pub use session::{Session, StepOutcome};
